use google_sheets4::FieldMask;
use google_sheets4::api::{
    CellData, CellFormat, Color, GridRange, RepeatCellRequest, Request, TextFormat,
};

/// Bold the header row and shade it light grey.
pub(super) fn header_format_rule(sheet_id: i32) -> Request {
    let light_grey = Color {
        red: Some(0.9),
        green: Some(0.9),
        blue: Some(0.9),
        alpha: Some(1.0),
    };

    Request {
        repeat_cell: Some(RepeatCellRequest {
            range: Some(GridRange {
                sheet_id: Some(sheet_id),
                start_row_index: Some(0),
                end_row_index: Some(1),
                start_column_index: None,
                end_column_index: None,
            }),
            cell: Some(CellData {
                user_entered_format: Some(CellFormat {
                    text_format: Some(TextFormat {
                        bold: Some(true),
                        ..Default::default()
                    }),
                    background_color: Some(light_grey),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            fields: Some(FieldMask::new(&[
                "userEnteredFormat.textFormat.bold",
                "userEnteredFormat.backgroundColor",
            ])),
        }),
        ..Default::default()
    }
}
