//! # Label Program Tests
//!
//! Byte-exact checks of complete TSPL programs, plus the sequencing laws a
//! label must obey: order preservation, concatenation and first-error abort.

use pretty_assertions::assert_eq;
use tspl_label::{
    Alignment, Bar, Bitmap, BitmapMode, BitsPerPixel, Block, BlockFit, Cls, Command, Download,
    DownloadStorage, Gap, Label, Print, PutBmp, PutPcx, Size, Text, ValidationError,
};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn block() -> Block {
    Block::new()
        .x(16)
        .y(16)
        .width(368)
        .height(96)
        .font_name("3")
        .rotation(0)
        .x_multiplier(1.0)
        .y_multiplier(1.0)
        .alignment(Alignment::Center)
        .fit(BlockFit::Shrink)
        .content("Organic Coffee 250g", true)
}

fn bitmap() -> Bitmap {
    Bitmap::new()
        .x(0)
        .y(0)
        .width(100)
        .height(50)
        .mode(BitmapMode::Overwrite)
        .data(vec![0xFF])
}

/// Render the program as text, for readable diffs. Only valid for programs
/// without binary payloads.
fn text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).expect("program is not plain text")
}

// ============================================================================
// FULL PROGRAMS
// ============================================================================

#[test]
fn price_tag_program() {
    let label = Label::new()
        .cmd(Size::new().width(50.0).height(30.0).mm(true))
        .cmd(Gap::new().distance(2.0).offset(0.0).mm(true))
        .cmd(Cls::new())
        .cmd(block())
        .cmd(
            Text::new()
                .x(16)
                .y(140)
                .font_name("4")
                .rotation(0)
                .x_multiplier(2.0)
                .y_multiplier(2.0)
                .content("$12.90"),
        )
        .cmd(Bar::new().x(16).y(128).width(368).height(3))
        .cmd(PutPcx::new().x(300).y(150).file_name("LOGO.PCX"))
        .cmd(Print::new().sets(1).copies(2));

    let expected = concat!(
        "SIZE 50 mm,30 mm\r\n",
        "GAP 2 mm,0 mm\r\n",
        "CLS\r\n",
        "BLOCK 16,16,368,96,\"3\",0,1,1,2,1,\"Organic Coffee 250g\"\r\n",
        "TEXT 16,140,\"4\",0,2,2,\"$12.90\"\r\n",
        "BAR 16,128,368,3\r\n",
        "PUTPCX 300,150,\"LOGO.PCX\"\r\n",
        "PRINT 1,2\r\n",
    );
    assert_eq!(text(label.render().unwrap()), expected);
}

#[test]
fn download_then_draw_stored_bitmap() {
    let bmp = vec![b'B', b'M', 0x00, 0x0D, 0x0A, 0xFF];
    let label = Label::new()
        .cmd(
            Download::new()
                .storage(DownloadStorage::Flash)
                .name("LOGO.BMP")
                .data(bmp.clone()),
        )
        .cmd(Cls::new())
        .cmd(
            PutBmp::new()
                .x(8)
                .y(8)
                .file_name("LOGO.BMP")
                .bpp(BitsPerPixel::One),
        )
        .cmd(Print::new().sets(1));

    let mut expected = b"DOWNLOAD F,\"LOGO.BMP\",6,".to_vec();
    expected.extend_from_slice(&bmp);
    expected.extend_from_slice(b"\r\nCLS\r\nPUTBMP 8,8,\"LOGO.BMP\",1\r\nPRINT 1\r\n");
    assert_eq!(label.render().unwrap(), expected);
}

#[test]
fn download_example_bytes() {
    let out = Download::new()
        .name("IMAGE1")
        .data(vec![0x01, 0x02, 0x03])
        .render()
        .unwrap();
    assert_eq!(
        out,
        vec![
            b'D', b'O', b'W', b'N', b'L', b'O', b'A', b'D', b' ', b'"', b'I', b'M', b'A', b'G',
            b'E', b'1', b'"', b',', b'3', b',', 0x01, 0x02, 0x03, b'\r', b'\n',
        ]
    );
}

#[test]
fn bitmap_example_bytes() {
    let mut expected = b"BITMAP 0,0,100,50,0,".to_vec();
    expected.push(0xFF);
    expected.extend_from_slice(b"\r\n");
    assert_eq!(bitmap().render().unwrap(), expected);
}

// ============================================================================
// SEQUENCING LAWS
// ============================================================================

#[test]
fn rendering_concatenates_in_order() {
    let first = block();
    let second = bitmap();

    let mut expected = first.render().unwrap();
    expected.extend(second.render().unwrap());

    let label = Label::new().cmd(first.clone()).cmd(second.clone());
    assert_eq!(label.render().unwrap(), expected);

    let mut reversed = second.render().unwrap();
    reversed.extend(first.render().unwrap());
    assert_eq!(Label::new().cmd(second).cmd(first).render().unwrap(), reversed);
}

#[test]
fn absent_command_leaves_output_unchanged() {
    let label = Label::new().cmd(block()).cmd(bitmap());
    let before = label.render().unwrap();
    let after = label.maybe_cmd(None::<Text>).render().unwrap();
    assert_eq!(after, before);
}

#[test]
fn invalid_second_command_yields_its_error_only() {
    let invalid = block().rotation(45);
    let expected = invalid.render().unwrap_err();

    let label = Label::new().cmd(bitmap()).cmd(invalid);
    assert_eq!(label.render(), Err(expected));
}

#[test]
fn error_names_the_command_and_field() {
    let label = Label::new().cmd(Cls::new()).cmd(Download::new().name("A"));
    let err = label.render().unwrap_err();
    assert_eq!(err.command(), "DOWNLOAD");
    assert_eq!(err.field(), "data");
    assert_eq!(err.to_string(), "DOWNLOAD command: data should be specified");
}

// ============================================================================
// COMMAND VALUES
// ============================================================================

#[test]
fn partially_built_commands_can_be_reused() {
    let base = Text::new()
        .x(0)
        .font_name("2")
        .rotation(0)
        .x_multiplier(1.0)
        .y_multiplier(1.0);

    let line1 = base.clone().y(0).content("one");
    let line2 = base.clone().y(30).content("two");

    assert_eq!(
        text(Label::new().cmd(line1).cmd(line2).render().unwrap()),
        "TEXT 0,0,\"2\",0,1,1,\"one\"\r\nTEXT 0,30,\"2\",0,1,1,\"two\"\r\n"
    );
    assert_eq!(
        base.render(),
        Err(ValidationError::MissingField {
            command: "TEXT",
            field: "y"
        })
    );
}

#[test]
fn setting_a_required_field_fixes_the_error() {
    let missing_font = Block::new()
        .x(0)
        .y(0)
        .width(10)
        .height(10)
        .rotation(0)
        .x_multiplier(1.0)
        .y_multiplier(1.0)
        .content("x", false);
    assert_eq!(missing_font.render().unwrap_err().field(), "font_name");
    assert!(missing_font.font_name("1").render().is_ok());
}

/// The firmware has no escape for `"` inside a quoted field, so it is passed
/// through as is and the printer will end the field early.
#[test]
fn embedded_quotes_are_passed_through() {
    let out = PutPcx::new().x(0).y(0).file_name("A\"B.PCX").render().unwrap();
    assert_eq!(text(out), "PUTPCX 0,0,\"A\"B.PCX\"\r\n");
}

#[test]
fn labels_are_shareable_across_threads() {
    let label = Label::new().cmd(block()).cmd(bitmap());
    let expected = label.render().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let label = label.clone();
            std::thread::spawn(move || label.render().unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
