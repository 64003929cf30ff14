use preprocess::{preprocess, PreprocessConfig};

fn main() {
    let synopsis = "Di sebuah desa kecil, seorang anak menemukan peta kuno \
                    yang menunjukkan jalan ke kerajaan bawah laut. Bersama \
                    sahabatnya, ia berlayar melewati badai untuk membuktikan \
                    bahwa legenda itu nyata.";

    let cfg = PreprocessConfig::default();
    let lemmas = preprocess(synopsis, &cfg).expect("preprocessing succeeds");

    println!("input: {synopsis}");
    println!();
    println!("lemmas ({}): {:?}", lemmas.len(), lemmas);
}
