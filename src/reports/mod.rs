use bidforge::config::CostTable;
use bidforge::jobs::JobType;
use bidforge::pricing::BidResult;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

fn money(v: f64) -> String {
    format!("${:.2}", v)
}

fn title_case(key: &str) -> String {
    key.split('_')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn print_bid_summary(bid: &BidResult) {
    println!("\n📋 === JOB PRICING SUMMARY === 📋");

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Item").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    let a = &bid.additional_costs;
    table.add_row(vec![Cell::new("Job Type"), Cell::new(bid.job_type)]);
    table.add_row(vec![
        Cell::new("Square Footage"),
        Cell::new(bid.square_footage),
    ]);
    table.add_row(vec![
        Cell::new("Workers Assigned"),
        Cell::new(bid.workers_assigned),
    ]);
    table.add_row(vec![
        Cell::new("Material Cost ($)"),
        Cell::new(money(bid.material_cost)),
    ]);
    table.add_row(vec![
        Cell::new("Labor Hours"),
        Cell::new(format!("{:.2}", bid.labor_hours)),
    ]);
    table.add_row(vec![
        Cell::new("Labor Cost ($)"),
        Cell::new(money(bid.labor_cost)),
    ]);
    table.add_row(vec![Cell::new("Additional Costs:"), Cell::new("")]);
    for (label, value) in [
        ("Fence Cost", a.fence_cost),
        ("Light Cost", a.light_cost),
        ("Hoop Cost", a.hoop_cost),
        ("Net Cost", a.net_cost),
    ] {
        table.add_row(vec![
            Cell::new(format!("  {}", label)),
            Cell::new(money(value)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total Additional Costs ($)"),
        Cell::new(money(bid.total_additional_costs)),
    ]);
    table.add_row(vec![
        Cell::new("Travel Cost ($)"),
        Cell::new(money(bid.travel_cost)),
    ]);
    table.add_row(vec![
        Cell::new("Lodging Days"),
        Cell::new(format!("{:.2}", bid.lodging_days)),
    ]);
    table.add_row(vec![
        Cell::new("Lodging Cost ($)"),
        Cell::new(money(bid.lodging_cost)),
    ]);
    table.add_row(vec![
        Cell::new("Total Cost (before profit) ($)"),
        Cell::new(money(bid.total_cost)).fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new("Profit Margin (%)"),
        Cell::new(format!("{}", bid.profit_margin_percent)),
    ]);
    table.add_row(vec![
        Cell::new("Bid Price (with profit) ($)").add_attribute(Attribute::Bold),
        Cell::new(money(bid.bid_price))
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);

    println!("{}", table);
}

pub fn print_cost_table(costs: &CostTable) {
    println!("\n⚙️  === COST TABLE === ⚙️");

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Key").add_attribute(Attribute::Bold),
        Cell::new("Name"),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);
    if let Some(col) = table.column_mut(2) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (key, value) in costs.entries() {
        let id = key.to_string();
        table.add_row(vec![
            Cell::new(&id),
            Cell::new(title_case(&id)),
            Cell::new(format!("{}", value)),
        ]);
    }
    println!("{}", table);
}

pub fn print_job_types() {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Job Type").add_attribute(Attribute::Bold),
        Cell::new("Slug"),
    ]);
    for job in JobType::all() {
        table.add_row(vec![Cell::new(job), Cell::new(slug_of(&job.to_string()))]);
    }
    println!("{}", table);
}

fn slug_of(label: &str) -> String {
    label.to_ascii_lowercase().replace(['/', ' '], "_")
}
