use job_api::ApiClient;
use job_query::queries::{companies_key, JOBS};
use job_query::{QueryClient, QueryKey};
use job_views::pages::EMPLOYMENT_TYPES;
use job_views::{CompaniesPage, JobsPage};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::routes::Route;
use crate::Result;

const HELP: &str = "\
commands:
  search <text>      filter by keyword (empty clears)
  location <text>    filter jobs by location (empty clears)
  company <id|->     filter jobs by company, '-' for all
  type <type|->      employment type selector
  next | prev        move between result pages
  goto <path>        open '/' or '/companies'
  refresh            drop cached data for this page and reload
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Search(String),
    Location(String),
    Company(Option<i64>),
    Type(String),
    Next,
    Previous,
    Goto(String),
    Refresh,
    Help,
    Quit,
}

fn optional_arg(arg: &str) -> &str {
    if arg == "-" {
        ""
    } else {
        arg
    }
}

pub fn parse_command(line: &str) -> std::result::Result<BrowseCommand, String> {
    let line = line.trim();
    let (name, arg) = match line.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (line, ""),
    };
    match name.to_lowercase().as_str() {
        "search" | "s" => Ok(BrowseCommand::Search(optional_arg(arg).to_owned())),
        "location" | "l" => Ok(BrowseCommand::Location(optional_arg(arg).to_owned())),
        "company" | "c" => match optional_arg(arg) {
            "" => Ok(BrowseCommand::Company(None)),
            id => id
                .parse::<i64>()
                .map(|id| BrowseCommand::Company(Some(id)))
                .map_err(|_| format!("Not a company id: '{}'", id)),
        },
        "type" | "t" => Ok(BrowseCommand::Type(optional_arg(arg).to_owned())),
        "next" | "n" => Ok(BrowseCommand::Next),
        "prev" | "previous" | "p" => Ok(BrowseCommand::Previous),
        "goto" | "g" => Ok(BrowseCommand::Goto(arg.to_owned())),
        "refresh" | "r" => Ok(BrowseCommand::Refresh),
        "help" | "h" | "?" => Ok(BrowseCommand::Help),
        "quit" | "q" | "exit" => Ok(BrowseCommand::Quit),
        "" => Err(String::new()),
        other => Err(format!("Unknown command '{}', try 'help'", other)),
    }
}

enum Page {
    Jobs(JobsPage),
    Companies(CompaniesPage),
}

/// Routes between the two pages and feeds them commands.
/// Leaving a page discards its filter state.
pub struct Shell {
    client: QueryClient,
    api: ApiClient,
    page: Option<Page>,
}

impl Shell {
    pub fn new(client: QueryClient, api: ApiClient) -> Self {
        Self {
            client,
            api,
            page: None,
        }
    }

    pub async fn goto(&mut self, path: &str) {
        self.page = match Route::from_path(path) {
            Some(Route::Jobs) => Some(Page::Jobs(JobsPage::new())),
            Some(Route::Companies) => Some(Page::Companies(CompaniesPage::new())),
            None => {
                log::warn!(
                    "No route matches '{}', expected '{}' or '{}'",
                    path,
                    Route::Jobs.path(),
                    Route::Companies.path()
                );
                None
            }
        };
        self.load().await;
    }

    async fn load(&mut self) {
        match &mut self.page {
            Some(Page::Jobs(page)) => page.load(&self.client, &self.api).await,
            Some(Page::Companies(page)) => page.load(&self.client, &self.api).await,
            None => {}
        }
    }

    pub fn render(&self) -> String {
        match &self.page {
            Some(Page::Jobs(page)) => page.to_string(),
            Some(Page::Companies(page)) => page.to_string(),
            None => String::new(),
        }
    }

    /// Apply one command; returns a message for the user when it had no effect
    pub async fn apply(&mut self, command: BrowseCommand) -> Option<String> {
        match command {
            BrowseCommand::Quit => return None,
            BrowseCommand::Help => return Some(HELP.to_owned()),
            BrowseCommand::Goto(path) => {
                self.goto(&path).await;
                return None;
            }
            _ => {}
        }
        let message = match (&mut self.page, command) {
            (_, BrowseCommand::Quit | BrowseCommand::Help | BrowseCommand::Goto(_)) => None,
            (Some(Page::Jobs(page)), BrowseCommand::Search(text)) => {
                page.set_search(&text);
                None
            }
            (Some(Page::Jobs(page)), BrowseCommand::Location(text)) => {
                page.set_location(&text);
                None
            }
            (Some(Page::Jobs(page)), BrowseCommand::Company(id)) => {
                page.set_company(id);
                None
            }
            (Some(Page::Jobs(page)), BrowseCommand::Type(kind)) => {
                if kind.is_empty() || EMPLOYMENT_TYPES.iter().any(|(value, _)| *value == kind) {
                    page.set_employment_type(&kind);
                    None
                } else {
                    let known = EMPLOYMENT_TYPES
                        .iter()
                        .map(|(value, _)| *value)
                        .collect::<Vec<_>>()
                        .join(", ");
                    Some(format!("Unknown type '{}', one of: {}", kind, known))
                }
            }
            (Some(Page::Jobs(page)), BrowseCommand::Next) => {
                (!page.next()).then(|| "Already on the last page".to_owned())
            }
            (Some(Page::Jobs(page)), BrowseCommand::Previous) => {
                (!page.previous()).then(|| "Already on the first page".to_owned())
            }
            (Some(Page::Jobs(_)), BrowseCommand::Refresh) => {
                self.client.invalidate_queries(&QueryKey::entity(JOBS));
                None
            }
            (Some(Page::Companies(page)), BrowseCommand::Search(text)) => {
                // local filter, nothing to fetch
                page.set_search(&text);
                return None;
            }
            (Some(Page::Companies(_)), BrowseCommand::Refresh) => {
                self.client.invalidate_queries(&companies_key());
                None
            }
            (Some(Page::Companies(_)), _) => Some("Not available on the companies page".to_owned()),
            (None, _) => Some("No page open, use 'goto /' or 'goto /companies'".to_owned()),
        };
        if message.is_none() {
            self.load().await;
        }
        message
    }
}

pub async fn browse(client: QueryClient, api: ApiClient, path: &str) -> Result<()> {
    let mut shell = Shell::new(client, api);
    shell.goto(path).await;
    print!("{}", shell.render());
    println!("type 'help' for commands");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(BrowseCommand::Quit) => break,
            Ok(command) => command,
            Err(message) => {
                if !message.is_empty() {
                    println!("{}", message);
                }
                continue;
            }
        };
        let redraw = !matches!(command, BrowseCommand::Help);
        if let Some(message) = shell.apply(command).await {
            println!("{}", message);
        } else if redraw {
            print!("{}", shell.render());
        }
    }
    Ok(())
}
