//! Representative clipboard payloads.

/// Office-style paste: styled spans, nbsp padding, break pairs, empty blocks.
pub const OFFICE_PASTE: &str = concat!(
    r#"<p class="MsoNormal" style="margin:0"><span style="font-family:Calibri">Quarterly"#,
    "\u{a0}\u{a0}report</span></p>",
    r#"<p class="MsoNormal"><o:p>&nbsp;</o:p></p>"#,
    "<p>Line one<br><br>Line two</p>",
    "<div>\u{a0}</div>",
    r#"<p>See <a href="https://intranet.example.com/q3" target="_blank">intranet</a>"#,
    r#" and <a href="https://tracker.evil.net/?id=1">this</a>.</p>"#,
    r#"<table style="width:100%"><tr><td style="border:1px">1</td></tr></table>"#,
);

/// Browser-style paste that needs no changes for a site trusting example.com.
pub const CLEAN_PASTE: &str = concat!(
    "<h2>Title</h2>",
    "<p>Body with <a href=\"https://example.com/page\">a link</a>.</p>",
    "<ul><li>one</li><li>two</li></ul>",
);
