use image::{GrayImage, Luma};
use qrcode::QrCode;
use std::{env, fs::File, io};
use tspl_label::{Bitmap, BitmapMode, Cls, Gap, Label, Print, Size, Text};
//
// cargo run --example qr_label -- "https://example.com/item/1234"
//
// The program is written to the file named by TSPL_OUTPUT (read from the
// environment or a .env file), or to stdout when it is not set.
//

/// Pixels darker than this are printed.
const THRESHOLD: u8 = 128;

/// Pack a grayscale image into BITMAP rows, 8 pixels per byte, MSB first.
///
/// TSPL prints a dot for a `0` bit, so dark pixels clear their bit and the
/// padding at the end of each row stays white.
fn pack_rows(img: &GrayImage) -> (u32, Vec<u8>) {
    let width_bytes = (img.width() + 7) / 8;
    let mut data = Vec::with_capacity((width_bytes * img.height()) as usize);

    for y in 0..img.height() {
        for byte_x in 0..width_bytes {
            let mut tmp: u8 = 0xFF;
            for i in 0..8 {
                let x = byte_x * 8 + i;
                if x < img.width() && img.get_pixel(x, y)[0] < THRESHOLD {
                    tmp &= !(0x80 >> i);
                }
            }
            data.push(tmp);
        }
    }

    (width_bytes, data)
}

fn main() {
    env_logger::init();
    dotenvy::dotenv().ok();

    let content = env::args()
        .nth(1)
        .unwrap_or_else(|| "https://example.com/item/1234".to_string());

    let qrcode = QrCode::new(content.as_bytes()).unwrap();
    let img: GrayImage = qrcode
        .render::<Luma<u8>>()
        .quiet_zone(false)
        .module_dimensions(6, 6)
        .build();
    let (width_bytes, data) = pack_rows(&img);

    let label = Label::new()
        .cmd(Size::new().width(50.0).height(40.0).mm(true))
        .cmd(Gap::new().distance(2.0).offset(0.0).mm(true))
        .cmd(Cls::new())
        .cmd(
            Bitmap::new()
                .x(16)
                .y(16)
                .width(width_bytes as i32)
                .height(img.height() as i32)
                .mode(BitmapMode::Overwrite)
                .data(data),
        )
        .cmd(
            Text::new()
                .x(16)
                .y(img.height() as i32 + 24)
                .font_name("2")
                .rotation(0)
                .x_multiplier(1.0)
                .y_multiplier(1.0)
                .content(content),
        )
        .cmd(Print::new().sets(1));

    let result = match env::var("TSPL_OUTPUT") {
        Ok(path) => {
            println!("Writing label program to {}", path);
            File::create(&path)
                .map_err(tspl_label::Error::from)
                .and_then(|mut file| label.write_to(&mut file))
        }
        Err(_) => label.write_to(&mut io::stdout()),
    };

    match result {
        Ok(n) => eprintln!("{} bytes", n),
        Err(err) => panic!("Failed to build label: {}", err),
    }
}
