//! Prints the five dominant colors of an image.
//!
//! Lives in `demos/` and is registered as the `basic` example in `Cargo.toml`:
//!
//! ```text
//! cargo run --example basic -- path/to/image.jpg
//! ```

use dominance::image::io::Reader as ImageReader;

fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("usage: basic <image>");
    let reader = ImageReader::open(path).unwrap();
    let img = reader.decode().unwrap();

    let colors = dominance::DominantColorsBuilder::from_image(img)
        .color_count(5)
        .extract()
        .unwrap();

    println!("{:#?}", colors);
}
