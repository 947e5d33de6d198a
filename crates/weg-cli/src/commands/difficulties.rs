use comfy_table::{ContentArrangement, Table};
use weg_dice::Difficulty;

pub fn run() {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Difficulty", "Key", "Target"]);
    for tier in Difficulty::ALL {
        table.add_row(vec![
            tier.name().to_string(),
            tier.key().to_string(),
            tier.target().to_string(),
        ]);
    }
    println!("{table}");
}
