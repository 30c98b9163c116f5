use desk_api::session::{self, DEFAULT_PROVIDER};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<i64>,
    name: Option<String>,
    email: Option<String>,
    role: Option<String>,
    teams: Option<String>,
    server: String,
    note: Option<String>,
}

#[derive(Serialize)]
struct AuthLoginResponse {
    provider: String,
    login_url: String,
    opened: bool,
    note: &'static str,
}

#[derive(Serialize)]
struct ProvidersResponse {
    providers: Vec<String>,
}

#[derive(Serialize)]
struct LogoutResponse {
    logged_out: bool,
    note: &'static str,
}

const COOKIE_NOTE: &str =
    "after signing in, copy the session cookie into api.session_cookie (DESK_API__SESSION_COOKIE)";

/// Handle `desk auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Status => status(ctx, flags).await,
        AuthCommands::Login(args) => login(args, ctx, flags).await,
        AuthCommands::Logout => {
            ctx.gate.logout();
            output(
                &LogoutResponse {
                    logged_out: true,
                    note: "remove api.session_cookie to stop sending the session",
                },
                flags.format,
            )
        }
        AuthCommands::Providers => {
            let providers = session::enabled_providers(&ctx.client).await;
            output(&ProvidersResponse { providers }, flags.format)
        }
    }
}

async fn status(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let authenticated = ctx.gate.check_auth(&ctx.client).await;
    let user = ctx.gate.session().current_user();
    let response = AuthStatusResponse {
        authenticated,
        user_id: user.map(|u| u.id),
        name: user.map(|u| u.name.clone()),
        email: user.map(|u| u.email.clone()),
        role: user.map(|u| u.role.label().to_string()),
        teams: user.map(desk_core::entities::User::team_names),
        server: ctx.config.api.base_url().to_string(),
        note: (!authenticated).then_some(if ctx.config.api.has_session_cookie() {
            "the configured session was rejected; run `desk auth login`"
        } else {
            "api.session_cookie is not configured"
        })
        .map(String::from),
    };
    output(&response, flags.format)
}

async fn login(args: &AuthLoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let provider = args.provider.as_deref().unwrap_or(DEFAULT_PROVIDER);

    let enabled = session::enabled_providers(&ctx.client).await;
    if !enabled.is_empty() && !enabled.iter().any(|p| p.eq_ignore_ascii_case(provider)) {
        anyhow::bail!(
            "login provider '{provider}' is not enabled (available: {})",
            enabled.join(", ")
        );
    }

    let login_url = session::login_url(ctx.config.api.server_url(), provider);
    let opened = if args.no_browser {
        false
    } else {
        match open::that(&login_url) {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(%error, "failed to open browser; visit the login URL manually");
                false
            }
        }
    };

    output(
        &AuthLoginResponse {
            provider: provider.to_string(),
            login_url,
            opened,
            note: COOKIE_NOTE,
        },
        flags.format,
    )
}
