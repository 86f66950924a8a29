//! XML rendering of projected listings.
//!
//! ```text
//! <houses>
//!   <house>
//!     <price>100</price>
//!     <area>50</area>
//!     <furnishingstatus>Furnished</furnishingstatus>
//!   </house>
//! </houses>
//! ```

use std::fmt::Write;

use quick_xml::escape::escape;
use serde_json::Value;

use crate::listings::record::{format_number, ProjectedRecord};

const INDENT: &str = "  ";

/// Render the `houses` document. Infallible for any input.
pub fn to_xml(houses: &[ProjectedRecord]) -> String {
    if houses.is_empty() {
        return "<houses></houses>\n".to_string();
    }

    let mut out = String::from("<houses>\n");
    for house in houses {
        out.push_str(INDENT);
        out.push_str("<house>\n");
        write_element(&mut out, "price", &format_number(house.price));
        write_element(&mut out, "area", &format_number(house.area));
        write_element(&mut out, "furnishingstatus", &status_text(house.furnishing_status.as_ref()));
        out.push_str(INDENT);
        out.push_str("</house>\n");
    }
    out.push_str("</houses>\n");
    out
}

fn write_element(out: &mut String, name: &str, text: &str) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{INDENT}{INDENT}<{name}>{}</{name}>", escape(text));
}

/// Scalars render as text; anything else leaves the element empty.
fn status_text(status: Option<&Value>) -> String {
    match status {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null) | Some(Value::Array(_)) | Some(Value::Object(_)) | None => String::new(),
    }
}
