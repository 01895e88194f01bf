pub fn pixel_png_path() -> &'static str {
    return "./test/fixtures/pixel.png";
}

pub fn empty_png_path() -> &'static str {
    return "./test/fixtures/empty.png";
}

pub fn notes_txt_path() -> &'static str {
    return "./test/fixtures/notes.txt";
}

/// Stand-in image content that stays valid UTF-8, so multipart bodies can be
/// matched with regexes.
pub fn fake_png_bytes() -> Vec<u8> {
    return b"fake-png-bytes".to_vec();
}

pub fn long_prompt_fixture() -> &'static str {
    return "Hi there! The checkout service is paging again and the error budget for this week is almost gone. Can you look at the attached dashboard and tell me what changed?";
}
