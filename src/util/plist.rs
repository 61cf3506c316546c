/*!
 Contains helpers to coerce property list values into plain Rust types.
*/

use plist::Value;

/// Read a numeric value as a float, accepting either the real or the integer plist type
///
/// Archivers write point sizes as reals, but integral sizes sometimes arrive as
/// integers depending on the producer.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Real(float) => Some(*float),
        Value::Integer(int) => int
            .as_signed()
            .map(|signed| signed as f64)
            .or_else(|| int.as_unsigned().map(|unsigned| unsigned as f64)),
        _ => None,
    }
}
