//! In-memory PDF fixtures built with lopdf.

#![allow(dead_code)]

use lopdf::{dictionary, Document, Object, Stream};

/// Build a PDF with one page per content stream, all using Helvetica as /F1.
pub fn pdf_with_pages(contents: &[Vec<u8>]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let pages_id = doc.new_object_id();
    let mut kids = Vec::new();

    for content in contents {
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.clone()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ],
            "Contents" => Object::Reference(content_id),
            "Resources" => dictionary! {
                "Font" => dictionary! {
                    "F1" => Object::Reference(font_id),
                },
            },
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(count),
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Content stream placing each line of text 20pt below the previous one.
pub fn text_lines(lines: &[&str]) -> Vec<u8> {
    let mut content = String::new();
    for (i, line) in lines.iter().enumerate() {
        let y = 740 - 20 * i as i64;
        content.push_str(&format!("BT /F1 10 Tf 72 {} Td ({}) Tj ET\n", y, line));
    }
    content.into_bytes()
}

/// Content stream drawing a ruled grid with one text value per cell.
///
/// Columns are 80pt wide and rows 20pt high, starting at (50, 700).
pub fn ruled_table(rows: &[&[&str]]) -> Vec<u8> {
    let cols = rows.iter().map(|r| r.len()).max().unwrap_or(0) as i64;
    let (left, top, width, height) = (50i64, 700i64, 80i64, 20i64);
    let right = left + cols * width;
    let bottom = top - rows.len() as i64 * height;

    let mut content = String::from("1 w\n");
    for r in 0..=rows.len() as i64 {
        let y = top - r * height;
        content.push_str(&format!("{} {} m {} {} l S\n", left, y, right, y));
    }
    for c in 0..=cols {
        let x = left + c * width;
        content.push_str(&format!("{} {} m {} {} l S\n", x, top, x, bottom));
    }
    for (r, row) in rows.iter().enumerate() {
        let y = top - (r as i64 + 1) * height + 6;
        for (c, cell) in row.iter().enumerate() {
            let x = left + c as i64 * width + 6;
            content.push_str(&format!("BT /F1 9 Tf {} {} Td ({}) Tj ET\n", x, y, cell));
        }
    }
    content.into_bytes()
}
