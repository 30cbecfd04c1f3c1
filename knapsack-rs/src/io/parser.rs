use std::sync::LazyLock;

use anyhow::{Context, Result, ensure};
use regex::Regex;

use crate::io::ext_repr::{ExtItem, ExtKPInstance};
use crate::util::FixedPoint;

static CAPACITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([0-9.]+)\s*:").expect("invalid capacity regex"));

static ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\s*([0-9]+)\s*,\s*([0-9.]+)\s*,\s*€\s*([0-9]+)\s*\)")
        .expect("invalid item regex")
});

/// Parses a single row in the form of `capacity : (id,weight,€value) (id,weight,€value) ...`,
/// for example `50 : (1,10,€60) (2,20,€100) (3,30,€100)`.
///
/// Capacity and weights are decimals and converted to hundredths, ids and values are integers.
pub fn parse_row(row: &str, name: &str) -> Result<ExtKPInstance> {
    let captures = CAPACITY_RE
        .captures(row)
        .with_context(|| format!("no capacity found in row {row:?}"))?;
    let capacity: FixedPoint = captures[1].parse()?;
    let rest = &row[captures.get(0).map_or(0, |m| m.end())..];

    let items = ITEM_RE
        .captures_iter(rest)
        .map(|c| {
            Ok(ExtItem {
                id: c[1].parse().with_context(|| format!("invalid item id {:?}", &c[1]))?,
                weight: c[2].parse::<FixedPoint>()?.units(),
                value: c[3].parse().with_context(|| format!("invalid item value {:?}", &c[3]))?,
            })
        })
        .collect::<Result<Vec<ExtItem>>>()?;

    let leftover = ITEM_RE.replace_all(rest, "");
    ensure!(
        leftover.trim().is_empty(),
        "unrecognized item(s) in row: {:?}",
        leftover.trim()
    );

    Ok(ExtKPInstance {
        name: name.to_string(),
        capacity: capacity.units(),
        items,
    })
}

/// Parses every non-blank line of `input` into an instance, named after its line number.
pub fn parse_rows(input: &str) -> Result<Vec<ExtKPInstance>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let name = format!("row_{}", i + 1);
            parse_row(line, &name).with_context(|| format!("could not parse line {}", i + 1))
        })
        .collect()
}
