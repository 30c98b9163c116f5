use desk_api::dashboard::{DashboardRequest, load_dashboard};
use desk_core::dashboard::{Dashboard, GrowthDirection};
use desk_core::entities::User;

use crate::cli::root_commands::DashboardArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, render_list};

/// Handle `desk dashboard`.
pub async fn handle(
    args: &DashboardArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = ctx.require_user().await?;
    let today = args.month.unwrap_or_else(|| chrono::Local::now().date_naive());
    let request = DashboardRequest::for_month_of(today, ctx.config.general.dashboard_fetch_size)
        .team(args.team)
        .search(args.search.clone());

    let result = load_dashboard(&ctx.client, &user, &request).await;
    let dashboard = ctx.observe(result)?;

    if flags.format != OutputFormat::Table {
        return output(&dashboard, flags.format);
    }
    print_summary(&dashboard);
    let (primary, secondary) = list_titles(&user);
    println!("\n{primary}");
    println!("{}", render_list(&dashboard.primary, flags.format)?);
    println!("\n{secondary}");
    println!("{}", render_list(&dashboard.secondary, flags.format)?);
    Ok(())
}

fn print_summary(dashboard: &Dashboard) {
    println!(
        "Period {} to {}",
        dashboard.period.start_param(),
        dashboard.period.end_param()
    );
    if let Some(query) = &dashboard.query {
        println!("Filtered by \"{query}\"");
    }
    let kpis = &dashboard.kpis;
    println!(
        "Total {}  Open {}  In progress {}  Resolved {}",
        kpis.total, kpis.open, kpis.in_progress, kpis.resolved
    );
    println!("{}", growth_line(dashboard));
    let meter = dashboard
        .meter
        .iter()
        .map(|share| format!("{} {:.1}%", share.status.label(), share.percent))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{meter}");
}

fn growth_line(dashboard: &Dashboard) -> String {
    let arrow = match dashboard.direction {
        GrowthDirection::Up => "up",
        GrowthDirection::Down => "down",
    };
    format!(
        "Growth {:+.1}% ({arrow}) vs {} last month",
        dashboard.growth, dashboard.previous_total
    )
}

fn list_titles(user: &User) -> (&'static str, &'static str) {
    if user.is_admin() {
        ("Recent tickets", "Critical tickets")
    } else {
        ("My tickets in progress", "My paused tickets")
    }
}
