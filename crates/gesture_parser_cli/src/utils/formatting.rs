use gesture_parser_core::geometry::Point;

/// Prints `key: value` lines with keys right-aligned to the widest one.
/// Multi-line values are continued under the value column.
pub fn print_kv_block_colored_keys<F>(pairs: &[(&str, String)], color_key: F)
where
    F: Fn(&str) -> String,
{
    let key_w = pairs
        .iter()
        .map(|(k, _)| k.chars().count())
        .max()
        .unwrap_or(0);

    for (k, v) in pairs {
        let key_padded = format!("{:>key_w$}", k, key_w = key_w);
        let key_col = color_key(&key_padded);

        let v = v.trim_end_matches('\n');
        if v.contains('\n') {
            let mut it = v.lines();
            let first = it.next().unwrap_or("");
            println!("{}: {}", key_col, first);
            for line in it {
                println!("{:>key_w$}  {}", "", line, key_w = key_w);
            }
        } else {
            println!("{}: {}", key_col, v);
        }
    }
}

pub fn fmt_point(p: Point) -> String {
    format!("({:.2}, {:.2})", p.x, p.y)
}

/// Fixed precision for finite values; `inf` / `NaN` spelled out.
pub fn fmt_f64(v: f64, precision: usize) -> String {
    if v.is_finite() {
        format!("{:.*}", precision, v)
    } else {
        v.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_values_are_readable() {
        assert_eq!(fmt_f64(1.23456, 3), "1.235");
        assert_eq!(fmt_f64(f64::INFINITY, 3), "inf");
        assert_eq!(fmt_f64(f64::NAN, 3), "NaN");
    }
}
