// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! PDF receipts.
//!
//! Receipts are drawn with the PDF built-in Helvetica fonts, which only
//! cover Latin-1. Arabic sessions get English labels, and characters
//! outside Latin-1 in traveler data are printed as `?`.

use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerIndex,
    PdfLayerReference, PdfPageIndex,
};
use time::macros::format_description;
use tracing::debug;
use umrah_booking::{Receipt, ReceiptData, ReceiptError, ReceiptRenderer};
use umrah_booking_domain::{CatalogRef, Currency, Locale, SiteContext};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 7.0;
const SECTION_GAP_MM: f32 = 5.0;
const INDENT_MM: f32 = 6.0;

const TITLE_FONT_SIZE: f32 = 20.0;
const HEADER_FONT_SIZE: f32 = 13.0;
const NORMAL_FONT_SIZE: f32 = 11.0;

struct Labels {
    title: &'static str,
    booking_id: &'static str,
    date: &'static str,
    package: &'static str,
    selection: &'static str,
    program: &'static str,
    room: &'static str,
    visa: &'static str,
    per_passenger: &'static str,
    passengers: &'static str,
    phone: &'static str,
    email: &'static str,
    health: &'static str,
    total: &'static str,
    unpriced: &'static str,
}

const EN_LABELS: Labels = Labels {
    title: "Booking Receipt",
    booking_id: "Booking ID",
    date: "Date",
    package: "Package",
    selection: "Your selection",
    program: "Program",
    room: "Room",
    visa: "Visa",
    per_passenger: "per passenger",
    passengers: "Passengers",
    phone: "Phone",
    email: "Email",
    health: "Health",
    total: "Total",
    unpriced: "on request",
};

const FR_LABELS: Labels = Labels {
    title: "Reçu de réservation",
    booking_id: "Numéro de réservation",
    date: "Date",
    package: "Forfait",
    selection: "Votre sélection",
    program: "Programme",
    room: "Chambre",
    visa: "Visa",
    per_passenger: "par personne",
    passengers: "Voyageurs",
    phone: "Téléphone",
    email: "E-mail",
    health: "Santé",
    total: "Total",
    unpriced: "sur demande",
};

const fn labels_for(locale: Locale) -> &'static Labels {
    match locale {
        Locale::Fr => &FR_LABELS,
        Locale::En | Locale::Ar => &EN_LABELS,
    }
}

/// Suggested file name for a booking's receipt.
///
/// Anything in the id other than ASCII letters, digits, `-` and `_` becomes
/// `_`, so the name never leaves the directory it is written to.
#[must_use]
pub fn receipt_file_name(booking_id: &str) -> String {
    let id: String = booking_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("receipt-{id}.pdf")
}

/// Renders receipts as single-column A4 PDF documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfReceiptRenderer;

impl ReceiptRenderer for PdfReceiptRenderer {
    fn render(&self, data: &ReceiptData, context: &SiteContext) -> Result<Receipt, ReceiptError> {
        let bytes: Vec<u8> = render_pdf(data, context)?;
        debug!(
            booking_id = %data.booking_id,
            size = bytes.len(),
            locale = %context.locale,
            "Receipt rendered"
        );
        Ok(Receipt {
            file_name: receipt_file_name(&data.booking_id),
            bytes,
        })
    }
}

fn pdf_error(err: &printpdf::Error) -> ReceiptError {
    ReceiptError(err.to_string())
}

fn render_pdf(data: &ReceiptData, context: &SiteContext) -> Result<Vec<u8>, ReceiptError> {
    let labels: &Labels = labels_for(context.locale);
    let date: String = data
        .date
        .format(format_description!("[year]-[month]-[day]"))
        .map_err(|e| ReceiptError(e.to_string()))?;

    let (doc, page, layer): (PdfDocumentReference, PdfPageIndex, PdfLayerIndex) =
        PdfDocument::new(
            format!("{} {}", labels.title, data.booking_id),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
    let regular: IndirectFontRef = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| pdf_error(&e))?;
    let bold: IndirectFontRef = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| pdf_error(&e))?;

    {
        let mut writer: PageWriter<'_> = PageWriter {
            layer: doc.get_page(page).get_layer(layer),
            doc: &doc,
            regular,
            bold,
            y: PAGE_HEIGHT_MM - MARGIN_MM,
        };

        writer.line(labels.title, TITLE_FONT_SIZE, Weight::Bold, 0.0);
        writer.gap();
        writer.line(
            &format!("{}: {}", labels.booking_id, data.booking_id),
            NORMAL_FONT_SIZE,
            Weight::Regular,
            0.0,
        );
        writer.line(
            &format!("{}: {date}", labels.date),
            NORMAL_FONT_SIZE,
            Weight::Regular,
            0.0,
        );
        writer.line(
            &format!("{}: {}", labels.package, data.package_slug),
            NORMAL_FONT_SIZE,
            Weight::Regular,
            0.0,
        );
        writer.gap();

        writer.line(labels.selection, HEADER_FONT_SIZE, Weight::Bold, 0.0);
        let selections: [(&str, &CatalogRef); 3] = [
            (labels.program, &data.program),
            (labels.room, &data.room),
            (labels.visa, &data.visa),
        ];
        for ((label, entry), price) in selections.into_iter().zip(data.prices_mad) {
            writer.line(
                &format!(
                    "{label}: {} ({})",
                    entry.name,
                    price_text(price, context.currency, labels)
                ),
                NORMAL_FONT_SIZE,
                Weight::Regular,
                INDENT_MM,
            );
        }
        writer.gap();

        writer.line(
            &format!("{} ({})", labels.passengers, data.passengers.len()),
            HEADER_FONT_SIZE,
            Weight::Bold,
            0.0,
        );
        for (index, passenger) in data.passengers.iter().enumerate() {
            writer.line(
                &format!("{}. {}", index + 1, passenger.full_name()),
                NORMAL_FONT_SIZE,
                Weight::Bold,
                INDENT_MM,
            );
            writer.line(
                &format!("{}: {}", labels.phone, passenger.phone.trim()),
                NORMAL_FONT_SIZE,
                Weight::Regular,
                INDENT_MM * 2.0,
            );
            if !passenger.email.trim().is_empty() {
                writer.line(
                    &format!("{}: {}", labels.email, passenger.email.trim()),
                    NORMAL_FONT_SIZE,
                    Weight::Regular,
                    INDENT_MM * 2.0,
                );
            }
            if !passenger.health_condition.trim().is_empty() {
                writer.line(
                    &format!("{}: {}", labels.health, passenger.health_condition.trim()),
                    NORMAL_FONT_SIZE,
                    Weight::Regular,
                    INDENT_MM * 2.0,
                );
            }
        }
        writer.gap();

        let total: String = data.total_mad().map_or_else(
            || String::from(labels.unpriced),
            |amount| context.currency.format_mad(amount),
        );
        writer.line(
            &format!("{}: {total}", labels.total),
            HEADER_FONT_SIZE,
            Weight::Bold,
            0.0,
        );
    }

    doc.save_to_bytes().map_err(|e| pdf_error(&e))
}

fn price_text(price_mad: Option<u64>, currency: Currency, labels: &Labels) -> String {
    price_mad.map_or_else(
        || String::from(labels.unpriced),
        |amount| format!("{} {}", currency.format_mad(amount), labels.per_passenger),
    )
}

#[derive(Debug, Clone, Copy)]
enum Weight {
    Regular,
    Bold,
}

/// Writes lines top to bottom, starting a new page when one fills up.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
}

impl PageWriter<'_> {
    fn line(&mut self, text: &str, size: f32, weight: Weight, indent: f32) {
        if self.y < MARGIN_MM {
            let (page, layer): (PdfPageIndex, PdfLayerIndex) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_MM - MARGIN_MM;
        }

        let font: &IndirectFontRef = match weight {
            Weight::Regular => &self.regular,
            Weight::Bold => &self.bold,
        };
        self.layer.use_text(
            latin1(text),
            size,
            Mm(MARGIN_MM + indent),
            Mm(self.y),
            font,
        );
        self.y -= LINE_HEIGHT_MM;
    }

    fn gap(&mut self) {
        self.y -= SECTION_GAP_MM;
    }
}

/// Replaces characters the built-in fonts cannot draw.
pub(crate) fn latin1(text: &str) -> String {
    text.chars()
        .map(|c| {
            if u32::from(c) <= 0xFF && !c.is_control() {
                c
            } else {
                '?'
            }
        })
        .collect()
}
