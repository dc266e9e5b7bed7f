//! The six-slide "Hypervolume" investor pitch.

use crate::common::{Emu, RgbColor};
use crate::error::Result;
use crate::pptx::{Alignment, AutoShapeType, Presentation, Shape, Slide};

pub const DEFAULT_FILE_NAME: &str = "Hypervolume-Investor-Pitch-90s.pptx";

const DARK_NAVY: RgbColor = RgbColor::new(0x0D, 0x06, 0x26);
const MUTED_PURPLE: RgbColor = RgbColor::new(0x61, 0x5D, 0x71);
const CORAL: RgbColor = RgbColor::new(0xE2, 0x5B, 0x67);
const SALMON: RgbColor = RgbColor::new(0xF6, 0x76, 0x5D);
const WHITE: RgbColor = RgbColor::WHITE;
const LIGHT_BG: RgbColor = RgbColor::new(0xF7, 0xF6, 0xF9);
const ACCENT_TEAL: RgbColor = RgbColor::new(0x3A, 0x7C, 0x89);
const ASK_CARD: RgbColor = RgbColor::new(0x1A, 0x10, 0x35);

const FONT: &str = "Arial";

fn slide_width() -> Emu {
    Emu::inches(16.0)
}

fn slide_height() -> Emu {
    Emu::inches(9.0)
}

fn inches(v: f64) -> Emu {
    Emu::inches(v)
}

/// Left edge and width of the market funnel column.
const FUNNEL_LEFT: f64 = 8.8;
const FUNNEL_WIDTH: f64 = 6.2;

pub(crate) const FUNNEL: [(&str, &str, f64, RgbColor); 4] = [
    ("\u{20ac}900B+", "EU Annual Compliance", 6.2, DARK_NAVY),
    ("\u{20ac}250B", "Target Segment (TAM)", 5.2, MUTED_PURPLE),
    ("\u{20ac}12.5B", "Serviceable Market (SAM)", 4.2, CORAL),
    ("\u{20ac}125M", "Target 1% (SOM)", 3.2, SALMON),
];

/// Left edge of a funnel bar of `width` centered in the funnel column.
pub(crate) fn funnel_bar_left(width: Emu) -> Emu {
    let offset = (inches(FUNNEL_WIDTH) - width) / 2;
    inches(FUNNEL_LEFT) + offset
}

/// Accent color of the pillar card at `index`.
pub(crate) fn pillar_color(index: usize) -> RgbColor {
    match index {
        0 => CORAL,
        1 => DARK_NAVY,
        _ => ACCENT_TEAL,
    }
}

fn add_rect(slide: &mut Slide, left: Emu, top: Emu, width: Emu, height: Emu, fill: RgbColor) -> &mut Shape {
    let shape = slide.add_shape(AutoShapeType::Rectangle, left, top, width, height);
    shape.set_fill(fill).clear_line();
    shape
}

#[allow(clippy::too_many_arguments)]
fn add_text<'a>(
    slide: &'a mut Slide,
    left: Emu,
    top: Emu,
    width: Emu,
    height: Emu,
    text: &str,
    font_size: f64,
    color: RgbColor,
    bold: bool,
    alignment: Alignment,
) -> &'a mut Shape {
    let shape = slide.add_textbox(left, top, width, height);
    let tf = shape.text_frame_mut();
    tf.set_word_wrap(true).set_auto_size(None);

    let p = tf.paragraph_mut(0);
    p.set_text(text);
    p.font_mut()
        .name(FONT)
        .size(font_size)
        .color(color)
        .bold(bold);
    p.set_alignment(alignment)
        .set_space_before(0.0)
        .set_space_after(0.0);
    shape
}

/// Left-aligned, regular weight text.
fn add_body<'a>(
    slide: &'a mut Slide,
    (left, top, width, height): (Emu, Emu, Emu, Emu),
    text: &str,
    font_size: f64,
    color: RgbColor,
) -> &'a mut Shape {
    add_text(slide, left, top, width, height, text, font_size, color, false, Alignment::Left)
}

/// White bold centered label inside a filled shape.
fn label<'a>(shape: &'a mut Shape, text: &str, font_size: f64) -> &'a mut Shape {
    let p = shape.text_frame_mut().paragraph_mut(0);
    p.set_text(text);
    p.font_mut().name(FONT).size(font_size).color(WHITE).bold(true);
    p.set_alignment(Alignment::Center);
    shape
}

fn add_header_bar(slide: &mut Slide, title: &str) {
    add_rect(slide, Emu::ZERO, Emu::ZERO, slide_width(), inches(1.15), DARK_NAVY);
    add_text(
        slide,
        inches(0.8),
        inches(0.22),
        inches(14.0),
        inches(0.8),
        title,
        36.0,
        WHITE,
        true,
        Alignment::Left,
    );
}

/// Blank slide with the light background.
fn add_slide(pres: &mut Presentation) -> &mut Slide {
    let slide = pres.add_slide();
    slide.set_background(LIGHT_BG);
    slide
}

fn centered_line(slide: &mut Slide, top: f64, height: f64, text: &str, size: f64, color: RgbColor, bold: bool) {
    add_text(
        slide,
        Emu::ZERO,
        inches(top),
        slide_width(),
        inches(height),
        text,
        size,
        color,
        bold,
        Alignment::Center,
    );
}

fn title_slide(slide: &mut Slide) {
    slide.set_background(DARK_NAVY);

    centered_line(slide, 2.4, 1.5, "HYPERVOLUME", 72.0, WHITE, true);
    centered_line(slide, 3.9, 0.8, "The Fabric of Trust", 44.0, WHITE, false);
    add_rect(slide, inches(6.5), inches(5.0), inches(3.0), inches(0.06), CORAL);
    centered_line(
        slide,
        5.5,
        0.7,
        "Trust, Transparency & Transferability as a Service",
        22.0,
        MUTED_PURPLE,
        false,
    );
    centered_line(slide, 7.8, 0.5, "90-Second Investor Pitch", 16.0, MUTED_PURPLE, false);
}

fn problem_slide(slide: &mut Slide) {
    add_header_bar(slide, "The Problem");

    add_text(
        slide,
        inches(0.8),
        inches(1.6),
        inches(7.0),
        inches(1.2),
        "A manufacturer fails a compliance audit.",
        30.0,
        DARK_NAVY,
        true,
        Alignment::Left,
    );
    add_body(
        slide,
        (inches(0.8), inches(2.7), inches(7.0), inches(1.0)),
        "Not because they did anything wrong --\nbecause they cannot prove they didn't.",
        22.0,
        MUTED_PURPLE,
    );

    let box_x = inches(8.8);
    let box_w = inches(6.2);
    let cards = [
        ("3 ERPs, 2 countries, 4 vendors", "Data scattered. Nothing verifiable."),
        ("Lost contracts", "Legal exposure, reputational damage."),
        ("Not an edge case", "This is the default state of enterprise data."),
    ];
    for (idx, (title, subtitle)) in cards.iter().enumerate() {
        let y = inches(1.6) + inches(idx as f64 * 2.1);
        add_rect(slide, box_x, y, box_w, inches(1.7), WHITE);
        add_rect(slide, box_x, y, inches(0.08), inches(1.7), CORAL);
        add_text(
            slide,
            box_x + inches(0.35),
            y + inches(0.25),
            box_w - inches(0.6),
            inches(0.6),
            title,
            22.0,
            DARK_NAVY,
            true,
            Alignment::Left,
        );
        add_body(
            slide,
            (box_x + inches(0.35), y + inches(0.9), box_w - inches(0.6), inches(0.6)),
            subtitle,
            18.0,
            MUTED_PURPLE,
        );
    }

    let sectors = ["Healthcare", "Logistics", "ESG Reporting", "Supply Chain"];
    for (idx, sector) in sectors.iter().enumerate() {
        let x = inches(0.8) + inches(idx as f64 * 2.2);
        let pill = add_rect(slide, x, inches(7.4), inches(1.9), inches(0.5), DARK_NAVY);
        pill.text_frame_mut().set_word_wrap(false);
        label(pill, sector, 14.0)
            .text_frame_mut()
            .paragraph_mut(0)
            .set_space_before(4.0);
    }
}

fn shift_slide(slide: &mut Slide) {
    add_header_bar(slide, "The Shift");

    add_body(
        slide,
        (inches(0.8), inches(1.6), inches(6.5), inches(0.6)),
        "The last 20 years:",
        20.0,
        MUTED_PURPLE,
    );
    for (idx, word) in ["Velocity", "Variety", "Volume"].iter().enumerate() {
        let x = inches(0.8) + inches(idx as f64 * 2.5);
        add_rect(slide, x, inches(2.2), inches(2.2), inches(1.4), WHITE);
        add_text(
            slide,
            x,
            inches(2.45),
            inches(2.2),
            inches(1.0),
            word,
            28.0,
            MUTED_PURPLE,
            true,
            Alignment::Center,
        );
    }

    add_text(
        slide,
        inches(0.8),
        inches(4.0),
        inches(7.0),
        inches(0.6),
        "The next decade demands:",
        20.0,
        DARK_NAVY,
        true,
        Alignment::Left,
    );
    for (idx, word) in ["Privacy", "Transferability", "Transparency"].iter().enumerate() {
        let x = inches(0.8) + inches(idx as f64 * 2.5);
        add_rect(slide, x, inches(4.6), inches(2.2), inches(1.4), CORAL);
        add_text(
            slide,
            x,
            inches(4.85),
            inches(2.2),
            inches(1.0),
            word,
            28.0,
            WHITE,
            true,
            Alignment::Center,
        );
    }

    // Insight panel
    add_rect(slide, inches(8.8), inches(1.6), inches(6.2), inches(5.5), WHITE);
    add_rect(slide, inches(8.8), inches(1.6), inches(6.2), inches(0.08), CORAL);

    let insights = [
        (2.2, 1.2, "Existing solutions always\nsacrifice at least one.", 30.0, DARK_NAVY),
        (3.8, 0.8, "Always a trade-off.", 26.0, CORAL),
        (5.2, 1.2, "Hypervolume eliminates\nthat trade-off.", 30.0, DARK_NAVY),
    ];
    for (top, height, text, size, color) in insights {
        add_text(
            slide,
            inches(9.2),
            inches(top),
            inches(5.4),
            inches(height),
            text,
            size,
            color,
            true,
            Alignment::Left,
        );
    }
}

fn solution_slide(slide: &mut Slide) {
    add_header_bar(slide, "Hypervolume T3aaS");

    add_text(
        slide,
        inches(0.8),
        inches(1.6),
        inches(14.0),
        inches(1.0),
        "Trust, Transparency & Transferability as a Service",
        34.0,
        DARK_NAVY,
        true,
        Alignment::Left,
    );
    add_body(
        slide,
        (inches(0.8), inches(2.5), inches(14.0), inches(0.7)),
        "A trust infrastructure layer. Not middleware. Not blockchain. Infrastructure.",
        22.0,
        MUTED_PURPLE,
    );

    let pillars = [
        ("Proprietary\nPersistence Layer", "Novel database paradigm\nfor immutable records"),
        ("Consensus\nMechanism", "Cross-boundary verification\nwithout exposing data"),
        ("Universal\nAPI Surface", "Connects to any system.\nNo forced migration."),
    ];
    for (idx, (title, desc)) in pillars.iter().enumerate() {
        let x = inches(0.8) + inches(idx as f64 * 5.0);
        let color = pillar_color(idx);

        add_rect(slide, x, inches(3.6), inches(4.5), inches(3.8), WHITE);
        add_rect(slide, x, inches(3.6), inches(4.5), inches(0.08), color);

        let circle = slide.add_shape(
            AutoShapeType::Oval,
            x + inches(0.3),
            inches(4.0),
            inches(0.7),
            inches(0.7),
        );
        circle.set_fill(color).clear_line();
        label(circle, &(idx + 1).to_string(), 24.0);

        add_text(
            slide,
            x + inches(0.3),
            inches(4.9),
            inches(3.8),
            inches(1.2),
            title,
            24.0,
            DARK_NAVY,
            true,
            Alignment::Left,
        );
        add_body(
            slide,
            (x + inches(0.3), inches(6.1), inches(3.8), inches(1.0)),
            desc,
            18.0,
            MUTED_PURPLE,
        );
    }

    add_body(
        slide,
        (inches(0.8), inches(7.8), inches(14.0), inches(0.6)),
        "Native Selective Disclosure  |  Universal Provenance Protocol  |  Domain-Aware Language",
        16.0,
        MUTED_PURPLE,
    );
}

fn market_slide(slide: &mut Slide) {
    add_header_bar(slide, "The Market");

    let stats = [
        (1.5, 1.8, "\u{20ac}900B+", 96.0, CORAL),
        (3.3, 0.8, "Annual EU Compliance Burden", 28.0, DARK_NAVY),
        (4.5, 1.8, "<3%", 96.0, DARK_NAVY),
        (6.3, 0.8, "Addressed by technology today", 28.0, MUTED_PURPLE),
    ];
    for (top, height, text, size, color) in stats {
        add_text(
            slide,
            inches(0.8),
            inches(top),
            inches(7.0),
            inches(height),
            text,
            size,
            color,
            true,
            Alignment::Left,
        );
    }

    for (idx, (amount, label_text, width, color)) in FUNNEL.iter().enumerate() {
        let y = inches(1.8) + inches(idx as f64 * 1.6);
        let width = inches(*width);
        let bar = add_rect(slide, funnel_bar_left(width), y, width, inches(1.1), *color);
        label(bar, &format!("{amount}  {label_text}"), 20.0)
            .text_frame_mut()
            .paragraph_mut(0)
            .set_space_before(8.0);
    }

    add_text(
        slide,
        inches(FUNNEL_LEFT),
        inches(8.0),
        inches(FUNNEL_WIDTH),
        inches(0.5),
        "MARKET FUNNEL",
        14.0,
        MUTED_PURPLE,
        true,
        Alignment::Center,
    );
}

fn ask_slide(slide: &mut Slide) {
    slide.set_background(DARK_NAVY);

    centered_line(slide, 1.0, 1.0, "The Ask", 44.0, WHITE, true);
    add_rect(slide, inches(6.5), inches(2.2), inches(3.0), inches(0.06), CORAL);
    centered_line(slide, 2.8, 1.5, "\u{20ac}1M", 96.0, CORAL, true);
    centered_line(
        slide,
        4.5,
        0.8,
        "First enterprise pilots: Supply Chain & Healthcare",
        28.0,
        WHITE,
        false,
    );

    let messages = [
        "The whitepaper exists.",
        "The codebase exists.",
        "The market gap exists.",
    ];
    for (idx, message) in messages.iter().enumerate() {
        let x = inches(2.5) + inches(idx as f64 * 3.8);
        add_rect(slide, x, inches(5.8), inches(3.3), inches(1.0), ASK_CARD);
        add_text(
            slide,
            x,
            inches(5.95),
            inches(3.3),
            inches(0.8),
            message,
            22.0,
            WHITE,
            true,
            Alignment::Center,
        );
    }

    centered_line(
        slide,
        7.4,
        0.8,
        "Trust infrastructure is not a feature -- it is the foundation.",
        24.0,
        MUTED_PURPLE,
        false,
    );
    centered_line(slide, 8.2, 0.5, "info@hypervolume.io", 16.0, MUTED_PURPLE, false);
}

/// Build the pitch deck.
pub fn build() -> Result<Presentation> {
    let mut pres = Presentation::with_size(slide_width(), slide_height());
    pres.properties_mut().title = Some("Hypervolume Investor Pitch".to_string());

    title_slide(add_slide(&mut pres));
    problem_slide(add_slide(&mut pres));
    shift_slide(add_slide(&mut pres));
    solution_slide(add_slide(&mut pres));
    market_slide(add_slide(&mut pres));
    ask_slide(add_slide(&mut pres));

    Ok(pres)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::{AutoSize, ShapeKind};

    #[test]
    fn test_slide_size_and_count() {
        let pres = build().unwrap();
        assert_eq!(pres.slide_count(), 6);
        assert_eq!(pres.slide_width().get(), 14630400);
        assert_eq!(pres.slide_height().get(), 8229600);
    }

    #[test]
    fn test_shape_counts() {
        let pres = build().unwrap();
        let counts: Vec<usize> = pres.slides().iter().map(Slide::shape_count).collect();
        assert_eq!(counts, vec![5, 20, 21, 20, 11, 12]);
    }

    #[test]
    fn test_backgrounds() {
        let pres = build().unwrap();
        let bgs: Vec<Option<RgbColor>> = pres.slides().iter().map(Slide::background).collect();
        assert_eq!(
            bgs,
            vec![
                Some(DARK_NAVY),
                Some(LIGHT_BG),
                Some(LIGHT_BG),
                Some(LIGHT_BG),
                Some(LIGHT_BG),
                Some(DARK_NAVY)
            ]
        );
    }

    #[test]
    fn test_funnel_bars_are_centered() {
        for (_, _, width, _) in FUNNEL {
            let width = inches(width);
            let left = funnel_bar_left(width);
            let right_gap = inches(FUNNEL_LEFT) + inches(FUNNEL_WIDTH) - (left + width);
            assert!((left - inches(FUNNEL_LEFT) - right_gap).get().abs() <= 1);
        }
        assert_eq!(funnel_bar_left(inches(6.2)), inches(8.8));
        assert_eq!(funnel_bar_left(inches(3.2)), inches(8.8) + inches(1.5));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn prop_funnel_bar_gaps_match(width in 0i64..=5_669_280) {
                let width = Emu(width);
                let left = funnel_bar_left(width);
                let left_gap = left - inches(FUNNEL_LEFT);
                let right_gap = inches(FUNNEL_LEFT) + inches(FUNNEL_WIDTH) - (left + width);
                prop_assert!(left_gap.get() >= 0);
                prop_assert!((left_gap - right_gap).get().abs() <= 1);
            }
        }
    }

    #[test]
    fn test_funnel_labels() {
        let pres = build().unwrap();
        let market = pres.slide(4).unwrap();
        let bars: Vec<&Shape> = market
            .shapes()
            .iter()
            .filter(|s| s.kind() == ShapeKind::AutoShape(AutoShapeType::Rectangle))
            .skip(1)
            .collect();
        assert_eq!(bars.len(), 4);

        let first = bars[0].text_frame().unwrap();
        assert_eq!(first.text(), "\u{20ac}900B+  EU Annual Compliance");
        let p = &first.paragraphs()[0];
        assert_eq!(p.alignment(), Some(Alignment::Center));
        assert_eq!(p.space_before(), Some(8.0));
        assert_eq!(p.font().size, Some(20.0));
        assert_eq!(bars[3].fill(), Some(SALMON));
    }

    #[test]
    fn test_pillar_colors() {
        assert_eq!(pillar_color(0), CORAL);
        assert_eq!(pillar_color(1), DARK_NAVY);
        assert_eq!(pillar_color(2), ACCENT_TEAL);

        let pres = build().unwrap();
        let circles: Vec<&Shape> = pres
            .slide(3)
            .unwrap()
            .shapes()
            .iter()
            .filter(|s| s.kind() == ShapeKind::AutoShape(AutoShapeType::Oval))
            .collect();
        assert_eq!(circles.len(), 3);
        for (idx, circle) in circles.iter().enumerate() {
            assert_eq!(circle.fill(), Some(pillar_color(idx)));
            assert_eq!(
                circle.text_frame().map(|tf| tf.text()),
                Some((idx + 1).to_string())
            );
        }
    }

    #[test]
    fn test_text_boxes_do_not_autofit() {
        let pres = build().unwrap();
        for slide in pres.slides() {
            for shape in slide.shapes().iter().filter(|s| s.kind() == ShapeKind::TextBox) {
                let tf = shape.text_frame().unwrap();
                assert_eq!(tf.word_wrap(), Some(true));
                assert_eq!(tf.auto_size(), None::<AutoSize>);
                assert_eq!(tf.paragraphs()[0].font().name.as_deref(), Some(FONT));
            }
        }
    }

    #[test]
    fn test_sector_pills_do_not_wrap() {
        let pres = build().unwrap();
        let problem = pres.slide(1).unwrap();
        let pill = problem
            .shapes()
            .iter()
            .find(|s| s.text_frame().map(|tf| tf.text()).as_deref() == Some("Healthcare"))
            .unwrap();
        let tf = pill.text_frame().unwrap();
        assert_eq!(tf.word_wrap(), Some(false));
        assert_eq!(tf.paragraphs()[0].space_before(), Some(4.0));
    }
}
