//! CSV serialization in the spreadsheet-locale dialect.
//!
//! The dialect is fixed: UTF-8 BOM, `;` delimiters, string fields wrapped
//! in double quotes, prices with a comma decimal separator. The `csv`
//! crate is deliberately not used here; it would escape embedded quotes
//! and change the output byte-for-byte. A field value containing a double
//! quote produces a malformed document — known limitation, not handled.

use crate::entities::part::Part;

const BOM: char = '\u{feff}';

const HEADER: &str =
    "ID;\"Nome\";\"Código\";\"Fabricante\";\"Veículo\";\"Estoque\";\"Preço\";\"Categoria\";\"DataCadastro\"\n";

/// Serialize the selected parts into one CSV document
pub fn to_csv(parts: &[&Part]) -> String {
    let mut out = String::new();
    out.push(BOM);
    out.push_str(HEADER);

    for part in parts {
        out.push_str(&format!(
            "{};\"{}\";\"{}\";\"{}\";\"{}\";{};{};\"{}\";{}\n",
            part.id,
            part.name,
            part.code,
            part.manufacturer,
            part.compatible_vehicle,
            part.stock_quantity,
            part.unit_price.to_string().replace('.', ","),
            part.category,
            part.registration_date.format("%Y-%m-%d"),
        ));
    }

    out
}
