use comfy_table::{Table, presets::UTF8_FULL};
use courier_optimizer::report::dispatch_report::JsonDispatchReport;

pub fn render(report: &JsonDispatchReport) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Waybill", "Seq", "Address", "LonLat", "Distance (m)", "Orders", "Tasks",
    ]);

    for entry in &report.result.dispatch {
        table.add_row(vec![
            entry.waybill_no.clone(),
            entry.seq.to_string(),
            entry.address_no.clone(),
            entry.lon_lat.clone(),
            format!("{:.0}", entry.distance),
            entry.order_no.clone(),
            entry.task_no.clone(),
        ]);
    }

    table
}
