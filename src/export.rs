use crate::categorizer::CategorizationResult;
use crate::error::DfResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes results as CSV with a `number,digit_category,subcategory,score` header.
pub fn write_csv<W: Write>(writer: W, results: &[CategorizationResult]) -> DfResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for r in results {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_csv_file<P: AsRef<Path>>(path: P, results: &[CategorizationResult]) -> DfResult<()> {
    let file = File::create(path)?;
    write_csv(file, results)
}

pub fn to_json(results: &[CategorizationResult]) -> DfResult<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categorizer::Tier;

    #[test]
    fn test_csv_header_and_row() {
        let rows = vec![CategorizationResult {
            number: "0707".to_string(),
            digit_category: "4-digit".to_string(),
            subcategory: Tier::Platinum,
            score: 91,
        }];
        let mut out = Vec::new();
        write_csv(&mut out, &rows).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "number,digit_category,subcategory,score\n0707,4-digit,Platinum,91\n"
        );
    }
}
