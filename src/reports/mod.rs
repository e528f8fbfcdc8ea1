use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use digitforge::categorizer::{CategorizationResult, Tier};
use digitforge::census::TierCensus;
use digitforge::config::Feature;
use digitforge::generator::{GeneratedNumber, SearchOutcome, SearchSummary};
use digitforge::presets::CulturalPreset;
use digitforge::scorer::{ScoreDetails, TokenHits};
use strum::IntoEnumIterator;

fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Premium => Color::Magenta,
        Tier::Platinum => Color::Cyan,
        Tier::Gold => Color::Yellow,
        Tier::Silver => Color::White,
        Tier::Bronze => Color::DarkYellow,
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn right_align(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_categorization_table(results: &[CategorizationResult]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Number").add_attribute(Attribute::Bold),
        Cell::new("Category"),
        Cell::new("Tier"),
        Cell::new("Score").fg(Color::Cyan),
    ]);

    for r in results {
        table.add_row(vec![
            Cell::new(&r.number).add_attribute(Attribute::Bold),
            Cell::new(&r.digit_category),
            Cell::new(r.subcategory).fg(tier_color(r.subcategory)),
            Cell::new(r.score).fg(Color::Cyan),
        ]);
    }
    right_align(&mut table, 3..=3);
    println!("{}", table);
}

pub fn print_score_details(d: &ScoreDetails, hits: &TokenHits) {
    println!("\nBreakdown: {}", d.number);

    if let Some(shortcut) = d.shortcut {
        println!("  {} shortcut -> {}", shortcut, d.score);
        return;
    }

    let mut table = new_table();
    table.set_header(vec!["Feature", "Raw", "Weighted"]);
    for f in Feature::iter() {
        table.add_row(vec![
            Cell::new(f),
            Cell::new(format!("{:.2}", d.features.get(f))),
            Cell::new(format!("{:.2}", d.weighted.get(f))),
        ]);
    }

    let cultural = if hits.is_empty() {
        "cultural".to_string()
    } else {
        format!(
            "cultural (+{} / -{})",
            hits.lucky.join(","),
            hits.unlucky.join(",")
        )
    };
    table.add_row(vec![
        Cell::new(cultural),
        Cell::new(""),
        Cell::new(format!("{:.2}", d.cultural)),
    ]);
    table.add_row(vec![
        Cell::new("total").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.2}", d.raw_total)),
        Cell::new(d.score).add_attribute(Attribute::Bold),
    ]);
    right_align(&mut table, 1..=2);
    println!("{}", table);
}

pub fn print_generated(numbers: &[GeneratedNumber]) {
    let mut table = new_table();
    table.set_header(vec!["#", "Number", "Score", "Tier"]);
    for (i, n) in numbers.iter().enumerate() {
        let tier = Tier::for_score(n.score);
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&n.number).add_attribute(Attribute::Bold),
            Cell::new(n.score),
            Cell::new(tier).fg(tier_color(tier)),
        ]);
    }
    right_align(&mut table, 2..=2);
    println!("{}", table);
}

pub fn print_search_summary(s: &SearchSummary) {
    let status = match s.outcome {
        SearchOutcome::Satisfied => Cell::new(s.outcome).fg(Color::Green),
        SearchOutcome::Exhausted => Cell::new(s.outcome).fg(Color::Yellow),
        SearchOutcome::Cancelled => Cell::new(s.outcome).fg(Color::Red),
    };

    let mut table = new_table();
    table.add_row(vec![Cell::new("Outcome"), status]);
    table.add_row(vec![
        Cell::new("Found"),
        Cell::new(format!("{} / {}", s.found, s.limit)),
    ]);
    table.add_row(vec![Cell::new("Templates scored"), Cell::new(s.templates_scored)]);
    table.add_row(vec![Cell::new("Random draws"), Cell::new(s.random_attempts)]);
    table.add_row(vec![
        Cell::new("Elapsed"),
        Cell::new(format!("{:.2?}", s.elapsed)),
    ]);
    println!("\n{}", table);
}

pub fn print_presets() {
    let mut table = new_table();
    table.set_header(vec!["Preset", "Lucky", "Unlucky", "Notes"]);
    for p in CulturalPreset::iter() {
        table.add_row(vec![
            Cell::new(p).add_attribute(Attribute::Bold),
            Cell::new(p.lucky_tokens().join(", ")).fg(Color::Green),
            Cell::new(p.unlucky_tokens().join(", ")).fg(Color::Red),
            Cell::new(p.notes()),
        ]);
    }
    println!("{}", table);
}

pub fn print_census(c: &TierCensus) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(format!("{}-digit", c.length)).add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("Share"),
    ]);
    for (tier, count, share) in c.rows() {
        table.add_row(vec![
            Cell::new(tier).fg(tier_color(tier)),
            Cell::new(count),
            Cell::new(format!("{:.4}%", share * 100.0)),
        ]);
    }
    table.add_row(vec![
        Cell::new("total").add_attribute(Attribute::Bold),
        Cell::new(c.total()),
        Cell::new(""),
    ]);
    right_align(&mut table, 1..=2);
    println!("{}", table);
}
