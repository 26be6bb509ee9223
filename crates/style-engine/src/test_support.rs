//! XML fixtures shared by the unit tests

pub const CORRECT_STYLE: &str = r#"<style:style style:name="P1" style:family="paragraph">
    <style:paragraph-properties fo:margin-left="-1.75cm" fo:margin-right="-1.85cm" fo:text-indent="1.25cm" fo:text-align="justify"/>
    <style:text-properties style:font-name="Times New Roman" fo:font-size="14pt"/>
</style:style>"#;

pub const FOOTER_STYLE: &str = r#"<style:style style:name="P9" style:family="paragraph" style:parent-style-name="Footer" style:master-page-name="First_20_Page">
    <style:paragraph-properties fo:text-align="center"/>
</style:style>"#;

pub const LIST_STYLES: &str = r#"<text:list-style style:name="L1">
    <text:list-level-style-bullet text:level="1" text:bullet-char="•"/>
</text:list-style>
<text:list-style style:name="L2">
    <text:list-level-style-number text:level="1" style:num-format="1"/>
</text:list-style>"#;

/// Wrap automatic styles and body text into a `content.xml` document
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
    xmlns:dc="http://purl.org/dc/elements/1.1/"
    office:version="1.3">
<office:automatic-styles>{styles}</office:automatic-styles>
<office:body><office:text>{body}</office:text></office:body>
</office:document-content>"#
    )
}

/// All styles a fully conforming document needs
pub fn house_styles() -> String {
    format!("{CORRECT_STYLE}{FOOTER_STYLE}{LIST_STYLES}")
}

/// Paragraph holding only an image frame
pub const IMAGE_PARAGRAPH: &str = r#"<text:p text:style-name="P1"><draw:frame draw:name="Image1"><draw:image xlink:href="Pictures/1.png"/></draw:frame></text:p>"#;

/// Blank paragraph used for spacing
pub const BLANK: &str = r#"<text:p text:style-name="P1"/>"#;

pub fn paragraph(text: &str) -> String {
    format!(r#"<text:p text:style-name="P1">{text}</text:p>"#)
}

pub fn annotated_paragraph(text: &str) -> String {
    format!(
        r#"<text:p text:style-name="P1"><office:annotation><dc:creator>Reviewer</dc:creator><text:p>check</text:p></office:annotation>{text}</text:p>"#
    )
}
