//! Helpers for building OpenDocument containers on disk

#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const CORRECT_STYLE: &str = r#"<style:style style:name="P1" style:family="paragraph"><style:paragraph-properties fo:margin-left="-1.75cm" fo:margin-right="-1.85cm" fo:text-indent="1.25cm" fo:text-align="justify"/><style:text-properties style:font-name="Times New Roman" fo:font-size="14pt"/></style:style>"#;

pub const FOOTER_STYLE: &str = r#"<style:style style:name="P9" style:family="paragraph" style:parent-style-name="Footer" style:master-page-name="First_20_Page"><style:paragraph-properties fo:text-align="center"/></style:style>"#;

pub const BULLET_LIST_STYLE: &str = r#"<text:list-style style:name="L1"><text:list-level-style-bullet text:level="1" text:bullet-char="•"/></text:list-style>"#;

pub const TOC: &str = r#"<text:table-of-content text:name="TOC1"><text:index-body/></text:table-of-content>"#;

pub fn content(styles: &str, body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content
    xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0"
    xmlns:style="urn:oasis:names:tc:opendocument:xmlns:style:1.0"
    xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0"
    xmlns:table="urn:oasis:names:tc:opendocument:xmlns:table:1.0"
    xmlns:draw="urn:oasis:names:tc:opendocument:xmlns:drawing:1.0"
    xmlns:fo="urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0"
    xmlns:xlink="http://www.w3.org/1999/xlink"
    xmlns:dc="http://purl.org/dc/elements/1.1/">
<office:automatic-styles>{styles}</office:automatic-styles>
<office:body><office:text>{body}</office:text></office:body>
</office:document-content>"#
    )
}

pub fn paragraph(style: &str, text: &str) -> String {
    format!(r#"<text:p text:style-name="{style}">{text}</text:p>"#)
}

/// Write a container with the given entries, `mimetype` first and stored
pub fn write_container(dir: &Path, name: &str, entries: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).unwrap();
    let mut zip = ZipWriter::new(file);

    let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    zip.start_file("mimetype", stored).unwrap();
    zip.write_all(b"application/vnd.oasis.opendocument.text").unwrap();

    for (entry, data) in entries {
        zip.start_file(*entry, SimpleFileOptions::default()).unwrap();
        zip.write_all(data.as_bytes()).unwrap();
    }

    zip.finish().unwrap();
    path
}

pub fn write_odt(dir: &Path, name: &str, content_xml: &str) -> PathBuf {
    write_container(dir, name, &[("content.xml", content_xml)])
}
