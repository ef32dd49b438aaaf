//! Built-in text transforms.
//!
//! Every transform takes the registry (so it can call other transforms by
//! key), the subject text, the argument and whether the argument was the
//! entry's default.
use std::sync::OnceLock;

use regex::Regex;

use super::encode::{encode_uri, to_query_value as query_value};
use super::registry::TransformRegistry;
use crate::error::TransformError;
use crate::numfmt::{js_number_string, number_csv};

pub type TransformFn = fn(&TransformRegistry, &str, &str, bool) -> Result<String, TransformError>;

/// Character swapping map used by the webpage transform when no map is given.
pub const DEFAULT_CHAR_MAP: &str = "&\"><'%X\tZ\n$~()*@";
pub const WEBPAGE_HOST: &str = "https://6t.lt";
pub const NOT_ENOUGH_NUMBERS: &str = "Not enough numbers to generate a polygon path.";

static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
static SINGLE_QUOTE_UNSAFE: OnceLock<Regex> = OnceLock::new();
static BACKTICK_UNSAFE: OnceLock<Regex> = OnceLock::new();

/// Every number-looking run in `text`, in order.
pub fn pull_number_array(text: &str) -> Vec<f64> {
    let re = NUMBER_REGEX
        .get_or_init(|| Regex::new(r"-?(?:[0-9]*\.)?[0-9]+(?:[eE]-?[0-9]+)?").expect("invalid regex pattern"));
    re.find_iter(text).filter_map(|m| m.as_str().parse::<f64>().ok()).collect()
}

/// Replaces each character found in `map` by its mirror: index `i` maps to
/// index `len - 1 - i`.
pub fn char_swap(subject: &str, map: &str) -> String {
    let map: Vec<char> = map.chars().collect();
    subject
        .chars()
        .map(|c| match map.iter().position(|m| *m == c) {
            Some(i) => map[map.len() - 1 - i],
            None => c,
        })
        .collect()
}

fn shortest_command(cmd: char, abs: &[f64], rel: &[f64]) -> String {
    let abs = number_csv(abs);
    let rel = number_csv(rel);
    if abs.len() > rel.len() {
        format!("{}{}", cmd.to_ascii_lowercase(), rel)
    } else {
        format!("{}{}", cmd, abs)
    }
}

/// `d="…"` attribute for the polygon through consecutive number pairs, using
/// whichever of absolute/relative and line/horizontal/vertical is shortest.
pub fn polygon_path(subject: &str) -> String {
    let n = pull_number_array(subject);
    if n.len() < 6 {
        return NOT_ENOUGH_NUMBERS.to_string();
    }
    let mut path = format!("d=\"M{}", number_csv(&n[..2]));
    let mut i = 2;
    while i + 1 < n.len() {
        let (ax, ay, bx, by) = (n[i - 2], n[i - 1], n[i], n[i + 1]);
        let h_change = ax != bx;
        let v_change = ay != by;
        if h_change && v_change {
            path.push_str(&shortest_command('L', &[bx, by], &[bx - ax, by - ay]));
        } else if h_change {
            path.push_str(&shortest_command('H', &[bx], &[bx - ax]));
        } else if v_change {
            path.push_str(&shortest_command('V', &[by], &[by - ay]));
        }
        i += 2;
    }
    path.push_str("Z\"");
    path
}

/// `let str = …;` using the quote style that needs the fewest escapes.
pub fn script_var(subject: &str) -> String {
    let rep = format!("let str = {};", serde_json::Value::String(subject.to_string()));
    if !rep.contains('\\') {
        return rep;
    }
    let single = SINGLE_QUOTE_UNSAFE.get_or_init(|| Regex::new(r#"\\[^"]|'"#).expect("invalid regex pattern"));
    if !single.is_match(&rep) {
        return format!("let str = '{}';", subject);
    }
    let backtick = BACKTICK_UNSAFE.get_or_init(|| Regex::new(r#"\\[^"]|`|\$\{"#).expect("invalid regex pattern"));
    if !backtick.is_match(&rep) {
        return format!("let str = `{}`;", subject);
    }
    rep
}

pub(crate) fn to_webpage(reg: &TransformRegistry, subject: &str, arg: &str, fellback: bool) -> Result<String, TransformError> {
    if fellback {
        let swapped = reg.call("charSwap", subject, DEFAULT_CHAR_MAP)?;
        return Ok(format!("{}?h={}", WEBPAGE_HOST, reg.call("toQueryValue", &swapped, "")?));
    }
    let swapped = reg.call("charSwap", subject, arg)?;
    Ok(format!(
        "{}?m={}&h={}",
        WEBPAGE_HOST,
        reg.call("toQueryValue", arg, "")?,
        reg.call("toQueryValue", &swapped, "")?
    ))
}

pub(crate) fn get_numbers(_: &TransformRegistry, subject: &str, arg: &str, _: bool) -> Result<String, TransformError> {
    Ok(pull_number_array(subject).into_iter().map(js_number_string).collect::<Vec<_>>().join(arg))
}

pub(crate) fn get_polygon_path(_: &TransformRegistry, subject: &str, _: &str, _: bool) -> Result<String, TransformError> {
    Ok(polygon_path(subject))
}

pub(crate) fn no_indentation(_: &TransformRegistry, subject: &str, _: &str, _: bool) -> Result<String, TransformError> {
    Ok(subject.chars().filter(|c| !matches!(c, '\n' | '\r' | '\t')).collect())
}

pub(crate) fn char_swap_entry(_: &TransformRegistry, subject: &str, arg: &str, _: bool) -> Result<String, TransformError> {
    Ok(char_swap(subject, arg))
}

pub(crate) fn to_script_var(_: &TransformRegistry, subject: &str, _: &str, _: bool) -> Result<String, TransformError> {
    Ok(script_var(subject))
}

pub(crate) fn to_data_uri(_: &TransformRegistry, subject: &str, arg: &str, _: bool) -> Result<String, TransformError> {
    Ok(format!("data:{},{}", arg, encode_uri(subject).replace('#', "%23")))
}

pub(crate) fn to_query_value(_: &TransformRegistry, subject: &str, _: &str, _: bool) -> Result<String, TransformError> {
    Ok(query_value(subject))
}
