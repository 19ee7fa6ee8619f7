use crate::cli::{Cli, OutputFormat};
use crate::commands::{Commands, ListArgs, RegisterArgs};
use crate::error::{CliError, Result as CliErrorResult};
use crate::logger;
use crate::navigator::TerminalNavigator;
use crate::render::{self, cards, dashboard, table};

use std::sync::Arc;

use conv_client::{
    ApiClient, AuthController, AuthState, FileSessionStore, GuardDecision, LoadState, Navigator,
    RecordForm, RecordList, Route, RouteGuard, SessionContext, SubmitOutcome,
};
use conv_config::{Config, ListView};
use conv_core::{ListPage, ListQuery, PAGE_SIZE_OPTIONS, SortDirection, UserProfile};
use log::{debug, warn};
use serde::Serialize;
use serde_json::json;

/// Environment variable read when `login` gets no `--password`
pub const PASSWORD_ENV: &str = "CONV_PASSWORD";

/// Load configuration, start logging, and run one command.
///
/// Returns what should be written to stdout.
pub async fn run_cli(cli: Cli) -> CliErrorResult<String> {
    let mut config = Config::load()?;
    if let Some(server) = cli.server.clone() {
        config.api.base_url = server;
    }
    config.validate()?;

    let log_file = match &config.logging.file {
        Some(file) => Some(Config::config_dir()?.join(file)),
        None => None,
    };
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;
    config.log_summary();

    let app = App::new(config, cli.output_format())?;
    app.run(cli.command).await
}

/// `--password`, else the environment, else a usage error
pub fn resolve_password(flag: Option<String>, env: Option<String>) -> CliErrorResult<String> {
    flag.or(env)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| CliError::usage(format!("pass --password or set {PASSWORD_ENV}")))
}

/// The terminal shell: one session, one API client, and the views as commands
pub struct App {
    config: Config,
    client: Arc<ApiClient>,
    auth: AuthController,
    format: OutputFormat,
}

impl App {
    /// Session files under the configured session directory
    pub fn new(config: Config, format: OutputFormat) -> CliErrorResult<Self> {
        let store = FileSessionStore::new(config.session_dir()?);
        debug!("Session store at {}", store.dir().display());
        let session: SessionContext = Arc::new(store);
        let navigator: Arc<dyn Navigator> =
            Arc::new(TerminalNavigator::new(config.api.login_path.clone()));
        Self::with_session(config, session, navigator, format)
    }

    pub fn with_session(
        config: Config,
        session: SessionContext,
        navigator: Arc<dyn Navigator>,
        format: OutputFormat,
    ) -> CliErrorResult<Self> {
        let client = Arc::new(ApiClient::from_config(
            &config.api,
            session.clone(),
            navigator,
        )?);
        let auth = AuthController::new(client.clone(), session);

        Ok(Self {
            config,
            client,
            auth,
            format,
        })
    }

    pub async fn run(&self, command: Commands) -> CliErrorResult<String> {
        match command {
            Commands::Login { username, password } => {
                let password = resolve_password(password, std::env::var(PASSWORD_ENV).ok())?;
                self.login(&username, &password).await
            }
            Commands::Logout => self.logout(),
            Commands::Whoami { verify } => self.whoami(verify).await,
            Commands::Register(args) => self.register(args).await,
            Commands::List(args) => self.list(args).await,
            Commands::Stats => self.stats().await,
        }
    }

    async fn login(&self, username: &str, password: &str) -> CliErrorResult<String> {
        let user = self.auth.login(username, password).await?;

        match self.format {
            OutputFormat::Text => Ok(format!(
                "Signed in as {}\nZone: {}\n",
                user.display_name(),
                render::zone_label(&user)
            )),
            _ => self.json(&user),
        }
    }

    fn logout(&self) -> CliErrorResult<String> {
        self.auth.logout()?;

        match self.format {
            OutputFormat::Text => Ok("Signed out\n".to_string()),
            _ => self.json(&json!({ "signed_in": false })),
        }
    }

    async fn whoami(&self, verify: bool) -> CliErrorResult<String> {
        let state = if verify {
            self.auth.verify().await?
        } else {
            self.auth.restore()
        };

        let AuthState::Authenticated { user } = state else {
            return Err(CliError::NotSignedIn);
        };

        match self.format {
            OutputFormat::Text => Ok(render::header(user.as_ref())),
            _ => self.json(&json!({ "signed_in": true, "user": user })),
        }
    }

    async fn register(&self, args: RegisterArgs) -> CliErrorResult<String> {
        let user = self.enter(Route::Records)?;

        let query = self.list_query(&ListArgs::default())?;
        let mut list = RecordList::with_query(self.client.clone(), query);
        let refresh = list.refresh_handle();
        let form =
            RecordForm::new(self.client.clone()).with_on_success(move || refresh.mark_stale());
        form.set_draft(args.to_draft());

        let message = match form.submit().await {
            SubmitOutcome::Submitted { message } => message,
            SubmitOutcome::Invalid(errors) => return Err(CliError::Invalid(errors)),
            SubmitOutcome::Failed { message } => return Err(CliError::rejected(message)),
            SubmitOutcome::Busy => {
                return Err(CliError::rejected("A registration is already in progress"));
            }
        };

        if args.quiet {
            return match self.format {
                OutputFormat::Text => Ok(format!("{message}\n")),
                _ => self.json(&json!({ "message": message })),
            };
        }

        list.refresh_if_stale().await;
        if let LoadState::Failed(reason) = list.state() {
            warn!("Registered, but the list could not be reloaded: {reason}");
            return match self.format {
                OutputFormat::Text => Ok(format!("{message}\n{reason}\n")),
                _ => self.json(&json!({ "message": message, "error": reason })),
            };
        }

        let page = list.visible_page();
        match self.format {
            OutputFormat::Text => Ok(format!(
                "{}{message}\n\n{}",
                render::header(user.as_ref()),
                render_page(&page, list.query(), self.config.list.view)
            )),
            _ => self.json(&json!({ "message": message, "page": page })),
        }
    }

    async fn list(&self, args: ListArgs) -> CliErrorResult<String> {
        let user = self.enter(Route::Records)?;

        let mut list = RecordList::with_query(self.client.clone(), self.list_query(&args)?);
        if let LoadState::Failed(message) = list.refresh().await {
            return Err(CliError::rejected(message.clone()));
        }

        let page = list.visible_page();
        match self.format {
            OutputFormat::Text => {
                let view = args.view.unwrap_or(self.config.list.view);
                Ok(format!(
                    "{}{}",
                    render::header(user.as_ref()),
                    render_page(&page, list.query(), view)
                ))
            }
            _ => self.json(&page),
        }
    }

    async fn stats(&self) -> CliErrorResult<String> {
        let user = self.enter(Route::Dashboard)?;

        let stats = self.client.statistics().await.map_err(|e| {
            warn!("Failed to fetch statistics: {e}");
            CliError::rejected(format!("{}: {e}", dashboard::STATS_FAILED_MESSAGE))
        })?;

        match self.format {
            OutputFormat::Text => Ok(format!(
                "{}{}",
                render::header(user.as_ref()),
                dashboard::render(user.as_ref(), &stats)
            )),
            _ => self.json(&stats),
        }
    }

    /// Gate a guarded view on the stored session; no network call
    fn enter(&self, route: Route) -> CliErrorResult<Option<UserProfile>> {
        let state = self.auth.restore();
        match RouteGuard::check(route, &state) {
            GuardDecision::Render => Ok(state.user().cloned()),
            GuardDecision::Wait | GuardDecision::RedirectToLogin => {
                debug!("{} needs a session", route.path());
                Err(CliError::NotSignedIn)
            }
        }
    }

    fn list_query(&self, args: &ListArgs) -> CliErrorResult<ListQuery> {
        let page_size = args.page_size.unwrap_or(self.config.list.page_size);
        if !PAGE_SIZE_OPTIONS.contains(&page_size) {
            return Err(CliError::usage(format!(
                "--page-size must be one of {PAGE_SIZE_OPTIONS:?}, got {page_size}"
            )));
        }

        let mut query = ListQuery::default();
        query.set_page_size(page_size)?;
        if let Some(search) = &args.search {
            query.set_search(search.clone());
        }
        if let Some(category) = args.category {
            query.set_category(category);
        }
        if let Some(sex) = args.sex {
            query.set_sex(sex);
        }

        let key = args.sort.unwrap_or(query.sort().key);
        let direction = if args.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        query.set_sort(key, direction);

        if let Some(page) = args.page {
            query.set_page(usize::try_from(page.saturating_sub(1)).unwrap_or(usize::MAX));
        }
        Ok(query)
    }

    fn json<T: Serialize>(&self, value: &T) -> CliErrorResult<String> {
        let mut output = match self.format {
            OutputFormat::PrettyJson => serde_json::to_string_pretty(value)?,
            _ => serde_json::to_string(value)?,
        };
        output.push('\n');
        Ok(output)
    }
}

fn render_page(page: &ListPage<'_>, query: &ListQuery, view: ListView) -> String {
    match view {
        ListView::Table => table::render(page, query.sort()),
        ListView::Cards => cards::render(page),
    }
}
