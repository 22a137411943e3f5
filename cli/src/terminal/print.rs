use colored::*;
use hostident_common::host::ResolvedHost;

type Detail = (&'static str, ColoredString);

/// Tree view: input name as the head, identity fields one level below.
pub fn record_tree(idx: usize, record: &ResolvedHost) {
    let head: String = format!(
        "{} {}",
        format!("[{idx}]").bright_black(),
        record.input_name.cyan().bold()
    );
    println!("{head}");

    let details: Vec<Detail> = vec![
        ("Name", field(&record.computer_name)),
        ("Address", field(&record.ip_address)),
        ("DnsHost", field(&record.dns_host_name)),
        ("Domain", field(&record.domain)),
        ("FQDN", field(&record.fqdn)),
    ];

    for (i, (key, value)) in details.iter().enumerate() {
        let last: bool = i + 1 == details.len();
        let branch: ColoredString = if last {
            "└─".bright_black()
        } else {
            "├─".bright_black()
        };
        let padding: String = ".".repeat(8_usize.saturating_sub(key.len()));
        println!(
            " {} {}{}{} {}",
            branch,
            key,
            padding.bright_black(),
            ":".bright_black(),
            value
        );
    }
}

/// Quiet view: `input fqdn ip`, absent fields as dashes.
pub fn record_line(record: &ResolvedHost) {
    println!(
        "{} {} {}",
        record.input_name,
        record.fqdn.as_deref().unwrap_or("-"),
        record.ip_address.as_deref().unwrap_or("-"),
    );
}

fn field(value: &Option<String>) -> ColoredString {
    match value {
        Some(text) => text.normal(),
        None => "-".dimmed(),
    }
}
