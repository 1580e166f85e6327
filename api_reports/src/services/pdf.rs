use chrono::NaiveDateTime;
use common::error::{AppError, Res};
use common::fmt::{format_brl, format_date_br, format_datetime_br};
use common::misc::MovementKind;
use db::models::movement::Movement;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};
use rust_decimal::Decimal;

// A4 portrait, origin at the bottom-left.
const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN_L: f32 = 15.0;
const COL_VALOR_R: f32 = 195.0;
const TOP_Y: f32 = 277.0;
const BOTTOM_Y: f32 = 25.0;
const ROW_H: f32 = 6.0;

// Helvetica's average glyph is close to half an em; good enough to center
// and right-align without embedding font metrics.
const AVG_GLYPH_EM: f32 = 0.5;
const PT_TO_MM: f32 = 0.3528;

const DESCRICAO_MAX_CHARS: usize = 40;

pub struct ReportData<'a> {
    pub label: &'a str,
    pub entradas: Decimal,
    pub saidas: Decimal,
    pub saldo: Decimal,
    pub movements: &'a [Movement],
    pub generated_at: NaiveDateTime,
}

/// Draws the financial statement: centered title and period, the totals
/// band, the entries table with a page break whenever the content would run
/// past the bottom margin (the header row is redrawn on every page), and the
/// generation footer.
pub fn render(data: &ReportData) -> Res<Vec<u8>> {
    let (doc, page, layer) =
        PdfDocument::new("Relatório Financeiro", Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_err)?;

    let mut layer = doc.get_page(page).get_layer(layer);
    let mut y = TOP_Y;

    // header
    text_centered(&layer, &bold, "Relatório Financeiro", 20.0, y, dark());
    y -= 8.0;
    text_centered(&layer, &regular, data.label, 12.0, y, gray());
    y -= 14.0;

    // totals band
    draw_total(&layer, &regular, &bold, 45.0, "Entradas", data.entradas, green(), y);
    draw_total(&layer, &regular, &bold, 105.0, "Saídas", data.saidas, red(), y);
    let saldo_color = if data.saldo >= Decimal::ZERO { green() } else { red() };
    draw_total(&layer, &regular, &bold, 165.0, "Saldo", data.saldo, saldo_color, y);
    y -= 16.0;

    // entries table
    draw_table_header(&layer, &bold, y);
    y -= ROW_H;
    for movement in data.movements {
        if y < BOTTOM_Y {
            let (next_page, next_layer) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
            layer = doc.get_page(next_page).get_layer(next_layer);
            y = TOP_Y;
            draw_table_header(&layer, &bold, y);
            y -= ROW_H;
        }
        draw_row(&layer, &regular, movement, y);
        y -= ROW_H;
    }

    // footer
    y -= 6.0;
    if y < BOTTOM_Y {
        let (next_page, next_layer) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
        layer = doc.get_page(next_page).get_layer(next_layer);
        y = TOP_Y;
    }
    text_centered(
        &layer,
        &regular,
        &format!("Relatório gerado em {}", format_datetime_br(data.generated_at)),
        9.0,
        y,
        gray(),
    );
    y -= 5.0;
    text_centered(
        &layer,
        &regular,
        "MEI Finance - Gestão Financeira para Microempreendedores",
        9.0,
        y,
        gray(),
    );

    doc.save_to_bytes().map_err(pdf_err)
}

fn draw_total(
    layer: &PdfLayerReference,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
    center_x: f32,
    label: &str,
    amount: Decimal,
    color: Color,
    y: f32,
) {
    text_at_center(layer, regular, label, 10.0, center_x, y, gray());
    text_at_center(layer, bold, &format_brl(amount), 13.0, center_x, y - 7.0, color);
}

fn draw_table_header(layer: &PdfLayerReference, bold: &IndirectFontRef, y: f32) {
    text(layer, bold, "Data", 10.0, MARGIN_L, y, dark());
    text(layer, bold, "Tipo", 10.0, 45.0, y, dark());
    text(layer, bold, "Categoria", 10.0, 70.0, y, dark());
    text(layer, bold, "Descrição", 10.0, 105.0, y, dark());
    text_right(layer, bold, "Valor", 10.0, COL_VALOR_R, y, dark());

    let rule = Line {
        points: vec![
            (Point::new(Mm(MARGIN_L), Mm(y - 1.5)), false),
            (Point::new(Mm(COL_VALOR_R), Mm(y - 1.5)), false),
        ],
        is_closed: false,
    };
    layer.set_outline_color(gray());
    layer.set_outline_thickness(0.4);
    layer.add_line(rule);
}

fn draw_row(layer: &PdfLayerReference, font: &IndirectFontRef, movement: &Movement, y: f32) {
    let is_entrada = movement.tipo == MovementKind::Entrada.as_str();
    let tipo_label = if is_entrada { "Entrada" } else { "Saída" };
    let tipo_color = if is_entrada { green() } else { red() };

    text(layer, font, &format_date_br(movement.data), 9.0, MARGIN_L, y, dark());
    text(layer, font, tipo_label, 9.0, 45.0, y, tipo_color.clone());
    text(layer, font, &movement.categoria, 9.0, 70.0, y, dark());
    let descricao = movement.descricao.as_deref().unwrap_or("-");
    text(
        layer,
        font,
        &truncate(descricao, DESCRICAO_MAX_CHARS),
        9.0,
        105.0,
        y,
        dark(),
    );
    text_right(
        layer,
        font,
        &format_brl(movement.valor),
        9.0,
        COL_VALOR_R,
        y,
        tipo_color,
    );
}

fn text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    content: &str,
    size: f32,
    x: f32,
    y: f32,
    color: Color,
) {
    layer.set_fill_color(color);
    layer.use_text(content, size, Mm(x), Mm(y), font);
}

fn text_right(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    content: &str,
    size: f32,
    right_x: f32,
    y: f32,
    color: Color,
) {
    let x = right_x - estimated_width(content, size);
    text(layer, font, content, size, x, y, color);
}

fn text_centered(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    content: &str,
    size: f32,
    y: f32,
    color: Color,
) {
    text_at_center(layer, font, content, size, PAGE_W / 2.0, y, color);
}

fn text_at_center(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    content: &str,
    size: f32,
    center_x: f32,
    y: f32,
    color: Color,
) {
    let x = center_x - estimated_width(content, size) / 2.0;
    text(layer, font, content, size, x, y, color);
}

/// Approximate rendered width in millimeters.
fn estimated_width(content: &str, size: f32) -> f32 {
    content.chars().count() as f32 * size * AVG_GLYPH_EM * PT_TO_MM
}

fn truncate(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let mut out: String = content.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// How many table rows fit between the first row baseline and the bottom
/// margin.
pub fn rows_per_page(first_row_y: f32, bottom_y: f32, row_h: f32) -> usize {
    if first_row_y < bottom_y {
        return 0;
    }
    (((first_row_y - bottom_y) / row_h) as usize) + 1
}

fn pdf_err(e: printpdf::Error) -> AppError {
    AppError::Internal(format!("Failed to generate PDF: {}", e))
}

fn dark() -> Color {
    Color::Rgb(Rgb::new(0.18, 0.18, 0.18, None))
}

fn gray() -> Color {
    Color::Rgb(Rgb::new(0.4, 0.4, 0.4, None))
}

fn green() -> Color {
    Color::Rgb(Rgb::new(0.086, 0.639, 0.29, None))
}

fn red() -> Color {
    Color::Rgb(Rgb::new(0.863, 0.149, 0.149, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn entry(n: u32) -> Movement {
        Movement {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            tipo: if n % 2 == 0 { "entrada" } else { "saida" }.to_string(),
            valor: Decimal::new(n as i64 * 100, 2),
            categoria: "Vendas".to_string(),
            descricao: Some(format!("lançamento {}", n)),
            status: "pago".to_string(),
            data: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn row_capacity_matches_the_layout_constants() {
        // first row sits one row below the header drawn at y
        let first_row_y = TOP_Y - ROW_H;
        let capacity = rows_per_page(first_row_y, BOTTOM_Y, ROW_H);
        assert_eq!(capacity, 42);
    }

    #[test]
    fn no_rows_fit_below_the_bottom_margin() {
        assert_eq!(rows_per_page(BOTTOM_Y - 1.0, BOTTOM_Y, ROW_H), 0);
    }

    #[test]
    fn truncation_keeps_short_text_intact() {
        assert_eq!(truncate("curta", 40), "curta");
    }

    #[test]
    fn truncation_caps_long_text_with_ellipsis() {
        let long = "a".repeat(60);
        let cut = truncate(&long, 40);
        assert_eq!(cut.chars().count(), 40);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn renders_a_single_page_report() {
        let movements: Vec<Movement> = (0..5).map(entry).collect();
        let data = ReportData {
            label: "março 2026",
            entradas: Decimal::new(100_00, 2),
            saidas: Decimal::new(40_00, 2),
            saldo: Decimal::new(60_00, 2),
            movements: &movements,
            generated_at: NaiveDateTime::default(),
        };

        let bytes = render(&data).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn long_reports_paginate_without_failing() {
        let movements: Vec<Movement> = (0..150).map(entry).collect();
        let data = ReportData {
            label: "2026",
            entradas: Decimal::new(1_000_00, 2),
            saidas: Decimal::new(500_00, 2),
            saldo: Decimal::new(500_00, 2),
            movements: &movements,
            generated_at: NaiveDateTime::default(),
        };

        let bytes = render(&data).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        // 150 rows cannot fit on one page with 42-row capacity
        assert!(bytes.len() > 4_000);
    }
}
