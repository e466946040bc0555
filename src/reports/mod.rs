// ===== cleanroute/src/reports/mod.rs =====
use crate::cmd::audit::AuditSummary;
use cleanroute::dispatch::RoutePlan;
use cleanroute::job::Job;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::collections::HashMap;

pub fn print_plan(plan: &RoutePlan) {
    println!("\n🚚 === OPTIMIZED ROUTE === 🚚");
    println!(
        "Worker at {} | {} stops | {} batches | outcome: {}",
        plan.worker_location,
        plan.optimized_order.len(),
        plan.batches.len(),
        plan.outcome
    );

    let jobs_by_id: HashMap<u64, &Job> = plan
        .batches
        .iter()
        .flat_map(|b| std::iter::once(&b.anchor).chain(b.members.iter()))
        .map(|j| (j.id, j))
        .collect();

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Job").add_attribute(Attribute::Bold),
        Cell::new("Type"),
        Cell::new("Severity").fg(Color::Yellow),
        Cell::new("Lat"),
        Cell::new("Lng"),
    ]);

    for (stop, job_id) in plan.optimized_order.iter().enumerate() {
        if let Some(job) = jobs_by_id.get(job_id) {
            table.add_row(vec![
                Cell::new(stop + 1),
                Cell::new(job.id),
                Cell::new(job.waste_type),
                Cell::new(job.severity),
                Cell::new(format!("{:.6}", job.location.lat)),
                Cell::new(format!("{:.6}", job.location.lng)),
            ]);
        }
    }

    for i in [0, 1, 4, 5] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    println!("{table}");

    let mut batch_table = Table::new();
    batch_table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    batch_table.add_row(vec![
        Cell::new("Batch").add_attribute(Attribute::Bold),
        Cell::new("Anchor"),
        Cell::new("Members"),
        Cell::new("Count").fg(Color::Cyan),
    ]);

    for (i, batch) in plan.batches.iter().enumerate() {
        let members: Vec<String> = batch.members.iter().map(|j| j.id.to_string()).collect();
        batch_table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(batch.anchor.id),
            Cell::new(if members.is_empty() {
                "-".to_string()
            } else {
                members.join(", ")
            }),
            Cell::new(batch.size),
        ]);
    }

    println!("{batch_table}");

    if !plan.skipped.is_empty() {
        println!(
            "⚠️  {} jobs skipped for missing location data: {:?}",
            plan.skipped.len(),
            plan.skipped
        );
    }
}

pub fn print_audit(summary: &AuditSummary) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new("Located").fg(Color::Green),
        Cell::new("Missing").fg(Color::Red),
        Cell::new("Invalid").fg(Color::Red),
    ]);
    table.add_row(vec![
        Cell::new(summary.total),
        Cell::new(summary.located),
        Cell::new(summary.missing.len()),
        Cell::new(summary.invalid.len()),
    ]);

    println!("{table}");

    let mut breakdown = Table::new();
    breakdown
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    breakdown.add_row(vec![
        Cell::new("Severity").add_attribute(Attribute::Bold),
        Cell::new("Count"),
    ]);
    for (severity, count) in &summary.by_severity {
        breakdown.add_row(vec![Cell::new(severity), Cell::new(count)]);
    }
    breakdown.add_row(vec![
        Cell::new("Waste type").add_attribute(Attribute::Bold),
        Cell::new("Count"),
    ]);
    for (waste_type, count) in &summary.by_waste_type {
        breakdown.add_row(vec![Cell::new(waste_type), Cell::new(count)]);
    }

    println!("{breakdown}");

    if !summary.missing.is_empty() {
        println!("⚠️  Jobs without location: {:?}", summary.missing);
    }
    if !summary.invalid.is_empty() {
        println!("❌ Jobs with unusable coordinates: {:?}", summary.invalid);
    }
}
