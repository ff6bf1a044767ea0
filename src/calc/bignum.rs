/// Adds two decimal digit strings without going through a native integer.
///
/// Digits are paired from the least-significant end with carry propagation;
/// a final carry becomes a new most-significant digit. Inputs must be
/// canonical digit strings (validated upstream), so byte arithmetic on
/// ASCII digits is safe.
pub fn add_decimal(a: &str, b: &str) -> String {
    let mut out = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut a_digits = a.bytes().rev();
    let mut b_digits = b.bytes().rev();
    let mut carry = 0u8;

    loop {
        let da = a_digits.next();
        let db = b_digits.next();
        if da.is_none() && db.is_none() && carry == 0 {
            break;
        }
        let sum = da.map_or(0, |d| d - b'0') + db.map_or(0, |d| d - b'0') + carry;
        out.push(b'0' + sum % 10);
        carry = sum / 10;
    }

    if out.is_empty() {
        out.push(b'0');
    }

    out.iter().rev().map(|&d| d as char).collect()
}
