use std::collections::HashMap;

use super::args::ArgKey;
use crate::{options::TemplateOrder, parsing::kinds::TemplateCall};

/// Writes a template invocation: `{{name|value|key=value|...}}`.
///
/// Positional keys should be 1-based; a key of 0 is dropped whenever
/// renumbering happens. Whichever `order` is used, re-parsing the output gives
/// positional values `1..=max` in order (missing indices as empty strings) and
/// the named arguments in their original relative order.
pub fn make_template(name: &str, args: &[(ArgKey, String)], order: TemplateOrder) -> String {
    write_template(name, args.iter().map(|(k, v)| (k, v.as_str())), order)
}

/// [`make_template`] over borrowed pairs, as yielded by `TemplateArgs::iter`.
pub(crate) fn write_template<'a>(
    name: &str,
    args: impl IntoIterator<Item = (&'a ArgKey, &'a str)>,
    order: TemplateOrder,
) -> String {
    let args: Vec<(&ArgKey, &str)> = args.into_iter().collect();
    let mut out = String::from(TemplateCall::OPEN);
    out.push_str(name);
    match order {
        TemplateOrder::Interleaved => write_interleaved(&mut out, &args),
        TemplateOrder::NumberedFirst => write_numbered_first(&mut out, &args),
    }
    out.push_str(TemplateCall::CLOSE);
    out
}

/// Keeps the given order. Positional values carry no index in the output, so
/// they only survive as-is when they count up 1, 2, 3… as they are met; any
/// other arrangement is densified first.
fn write_interleaved(out: &mut String, args: &[(&ArgKey, &str)]) {
    if counts_up(args) {
        write_pairs(out, args.iter().copied());
    } else {
        log::debug!(target: "wikiscan", "renumbering out-of-order positional arguments");
        let dense = densify(args);
        write_pairs(out, dense.iter().map(|(k, v)| (k, *v)));
    }
}

fn write_pairs<'a>(out: &mut String, args: impl Iterator<Item = (&'a ArgKey, &'a str)>) {
    for (key, value) in args {
        match key {
            ArgKey::Named(name) => push_named(out, name, value),
            ArgKey::Positional(_) => push_positional(out, value),
        }
    }
}

fn write_numbered_first(out: &mut String, args: &[(&ArgKey, &str)]) {
    let lookup = positional_lookup(args);
    let max = lookup.keys().copied().max().unwrap_or(0);
    for n in 1..=max {
        push_positional(out, lookup.get(&n).copied().unwrap_or_default());
    }
    for (key, value) in args {
        if let ArgKey::Named(name) = key {
            push_named(out, name, value);
        }
    }
}

/// True when positional keys, in order of appearance, are exactly 1, 2, 3…
fn counts_up(args: &[(&ArgKey, &str)]) -> bool {
    let mut argindx = 0usize;
    for key in args.iter().filter_map(|(k, _)| k.as_positional()) {
        if key != argindx + 1 {
            return false;
        }
        argindx = key;
    }
    true
}

/// Rebuilds the list so positional keys run 1..=max exactly once, in order.
///
/// Named entries stay where they were. The first time a positional key `k`
/// beyond those already covered is reached, every index up to `k` is emitted
/// there, taking values from the whole list (the last value given for an
/// index wins) or an empty string.
fn densify<'a>(args: &[(&ArgKey, &'a str)]) -> Vec<(ArgKey, &'a str)> {
    let lookup = positional_lookup(args);
    let mut out = Vec::with_capacity(args.len());
    let mut covered = 0usize;

    for &(key, value) in args {
        match key {
            ArgKey::Named(_) => out.push((key.clone(), value)),
            ArgKey::Positional(k) if *k <= covered => {}
            ArgKey::Positional(k) => {
                for j in covered + 1..=*k {
                    let filled = lookup.get(&j).copied().unwrap_or_default();
                    out.push((ArgKey::Positional(j), filled));
                }
                covered = *k;
            }
        }
    }
    out
}

fn positional_lookup<'a>(args: &[(&ArgKey, &'a str)]) -> HashMap<usize, &'a str> {
    args.iter()
        .filter_map(|&(k, v)| Some((k.as_positional()?, v)))
        .collect()
}

fn push_positional(out: &mut String, value: &str) {
    out.push_str(TemplateCall::SEPARATOR);
    out.push_str(value);
}

fn push_named(out: &mut String, name: &str, value: &str) {
    out.push_str(TemplateCall::SEPARATOR);
    out.push_str(name);
    out.push_str(TemplateCall::ASSIGN);
    out.push_str(value);
}
