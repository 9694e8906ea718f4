//! Subcommand arguments and their handlers.
//!
//! Each clap argument struct converts into the matching
//! [`papillon_core::params`] structure, so the core never sees clap types:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Papillon
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use log::info;
use papillon_core::{
    params::{
        AddAccount, AddQrCode, AddQrCodeImage, ClassifySubject, Id, LinkFeature, ShowGrades,
        UpdateGrades, UpdatePeriods,
    },
    AccountService, GradesReport, MultiServiceFeature, Papillon, Periods,
};

use crate::renderer::TerminalRenderer;

#[derive(Subcommand)]
pub enum QrCommands {
    /// Store a new QR code
    #[command(alias = "a")]
    Add(QrAddArgs),
    /// List stored QR codes
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show one QR code with its symbol
    #[command(alias = "s")]
    Show(IdArgs),
    /// Remove a QR code
    #[command(aliases = ["d", "rm"])]
    Remove(IdArgs),
}

/// Store a new QR code
///
/// The payload comes from `--data`, from the contents of `--file`, or from
/// the first QR code found in the picture given with `--image`.
#[derive(Args)]
pub struct QrAddArgs {
    /// Label shown in the list
    pub name: String,
    /// Raw payload of the code
    #[arg(
        long,
        conflicts_with_all = ["file", "image"],
        required_unless_present_any = ["file", "image"]
    )]
    pub data: Option<String>,
    /// Read the payload from a file
    #[arg(long, conflicts_with = "image")]
    pub file: Option<PathBuf>,
    /// Read the payload from a picture of the code
    #[arg(long)]
    pub image: Option<PathBuf>,
}

impl QrAddArgs {
    /// Resolves a text payload and converts into core parameters.
    fn into_params(self) -> Result<AddQrCode> {
        let data = match (self.data, self.file) {
            (Some(data), _) => data,
            (None, Some(path)) => std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read QR payload from {}", path.display()))?,
            (None, None) => bail!("One of --data, --file or --image is required"),
        };
        Ok(AddQrCode {
            name: self.name,
            data,
        })
    }
}

#[derive(Args)]
pub struct IdArgs {
    /// Identifier of the record
    pub id: String,
}

impl From<IdArgs> for Id {
    fn from(val: IdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum AccountCommands {
    /// Register an account
    #[command(alias = "a")]
    Add(AccountAddArgs),
    /// List accounts
    #[command(aliases = ["l", "ls"])]
    List,
    /// Remove an account
    #[command(aliases = ["d", "rm"])]
    Remove(IdArgs),
    /// Delegate a feature of a multi-service space to another account
    Link(LinkArgs),
}

/// Register an account
///
/// Services: pronote, ecole-directe, skolengo, local, papillon-multi-service,
/// turboself, ard, izly, alise.
#[derive(Args)]
pub struct AccountAddArgs {
    /// Backend of the account
    #[arg(long)]
    pub service: AccountService,
    /// Display name of the account owner
    #[arg(long)]
    pub name: String,
    /// Identity provider of a local account, e.g. iut-lannion
    #[arg(long)]
    pub identity_provider: Option<String>,
    /// Feature switched off by the school instance (repeatable)
    #[arg(long = "disable-feature", value_name = "FEATURE")]
    pub disabled_features: Vec<MultiServiceFeature>,
}

impl From<AccountAddArgs> for AddAccount {
    fn from(val: AccountAddArgs) -> Self {
        AddAccount {
            service: val.service,
            name: val.name,
            identity_provider: val.identity_provider,
            disabled_features: val.disabled_features,
        }
    }
}

#[derive(Args)]
pub struct LinkArgs {
    /// Local id of the multi-service space
    pub space_id: String,
    /// Feature to delegate: grades, timetable, homeworks, attendance, news,
    /// canteen
    pub feature: MultiServiceFeature,
    /// Local id of the account serving the feature
    pub account_id: String,
}

impl From<LinkArgs> for LinkFeature {
    fn from(val: LinkArgs) -> Self {
        LinkFeature {
            space_id: val.space_id,
            feature: val.feature,
            account_id: val.account_id,
        }
    }
}

#[derive(Args)]
pub struct SubjectArgs {
    /// Local id of the account
    pub account_id: String,
    /// Subject label as shown by the school portal
    pub name: String,
}

impl From<SubjectArgs> for ClassifySubject {
    fn from(val: SubjectArgs) -> Self {
        ClassifySubject {
            account_id: val.account_id,
            entry: val.name,
        }
    }
}

#[derive(Subcommand)]
pub enum GradesCommands {
    /// Refresh the grading periods of an account
    #[command(alias = "p")]
    Periods(PeriodsArgs),
    /// Refresh the grades of one period
    #[command(alias = "u")]
    Update(UpdateGradesArgs),
    /// Show stored periods and grades
    #[command(alias = "s")]
    Show(ShowGradesArgs),
}

impl GradesCommands {
    pub fn snapshot_file(&self) -> Option<&Path> {
        match self {
            GradesCommands::Periods(args) => args.snapshot.as_deref(),
            GradesCommands::Update(args) => args.snapshot.as_deref(),
            GradesCommands::Show(_) => None,
        }
    }
}

#[derive(Args)]
pub struct PeriodsArgs {
    /// Local id of the account
    pub account_id: String,
    /// JSON export standing in for the school portal
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}

impl From<PeriodsArgs> for UpdatePeriods {
    fn from(val: PeriodsArgs) -> Self {
        UpdatePeriods {
            account_id: val.account_id,
        }
    }
}

/// Refresh the grades of one period
///
/// Without a period, the stored default period is used.
#[derive(Args)]
pub struct UpdateGradesArgs {
    /// Local id of the account
    pub account_id: String,
    /// Period name
    pub period: Option<String>,
    /// JSON export standing in for the school portal
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}

impl From<UpdateGradesArgs> for UpdateGrades {
    fn from(val: UpdateGradesArgs) -> Self {
        UpdateGrades {
            account_id: val.account_id,
            period: val.period,
        }
    }
}

#[derive(Args)]
pub struct ShowGradesArgs {
    /// Only show this period
    pub period: Option<String>,
}

impl From<ShowGradesArgs> for ShowGrades {
    fn from(val: ShowGradesArgs) -> Self {
        ShowGrades { period: val.period }
    }
}

/// Runs commands against a [`Papillon`] handle and renders the output.
pub struct Cli {
    app: Papillon,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(app: Papillon, renderer: TerminalRenderer) -> Self {
        Self { app, renderer }
    }

    pub async fn handle_qr_command(&self, command: QrCommands) -> Result<()> {
        match command {
            QrCommands::Add(mut args) => {
                let result = match args.image.take() {
                    Some(path) => {
                        let params = AddQrCodeImage {
                            name: args.name,
                            path,
                        };
                        self.app.add_qrcode_from_image(&params).await
                    }
                    None => self.app.add_qrcode(&args.into_params()?).await,
                }
                .context("Failed to add QR code")?;
                self.renderer.render(&result.to_string())
            }
            QrCommands::List => self.list_qrcodes().await,
            QrCommands::Show(args) => {
                let params = Id::from(args);
                let shown = self
                    .app
                    .show_qrcode_symbol(&params)
                    .await
                    .context("Failed to draw QR code")?;
                match shown {
                    Some(symbol) => self.renderer.render(&symbol.to_string()),
                    None => bail!("QR code with ID {} not found", params.id),
                }
            }
            QrCommands::Remove(args) => {
                let params = Id::from(args);
                let removed = self
                    .app
                    .remove_qrcode(&params)
                    .await
                    .context("Failed to remove QR code")?;
                match removed {
                    Some(result) => self.renderer.render(&result.to_string()),
                    None => self
                        .renderer
                        .render(&format!("No QR code with ID {}.\n", params.id)),
                }
            }
        }
    }

    pub async fn list_qrcodes(&self) -> Result<()> {
        let codes = self.app.list_qrcodes().await;
        if codes.is_empty() {
            return self.renderer.render(&format!("# QR codes\n\n{codes}"));
        }
        self.renderer
            .render(&format!("# QR codes ({})\n\n{codes}", codes.len()))
    }

    pub async fn handle_account_command(&self, command: AccountCommands) -> Result<()> {
        match command {
            AccountCommands::Add(args) => {
                let result = self
                    .app
                    .add_account(&args.into())
                    .await
                    .context("Failed to add account")?;
                self.renderer.render(&result.to_string())
            }
            AccountCommands::List => {
                let accounts = self.app.list_accounts().await;
                self.renderer.render(&format!("# Accounts\n\n{accounts}"))
            }
            AccountCommands::Remove(args) => {
                let params = Id::from(args);
                let removed = self
                    .app
                    .remove_account(&params)
                    .await
                    .context("Failed to remove account")?;
                match removed {
                    Some(result) => self.renderer.render(&result.to_string()),
                    None => self
                        .renderer
                        .render(&format!("No account with ID {}.\n", params.id)),
                }
            }
            AccountCommands::Link(args) => {
                let params = LinkFeature::from(args);
                let assignments = self
                    .app
                    .link_feature(&params)
                    .await
                    .context("Failed to link feature")?;

                let mut output = format!("# Space {}\n\n", params.space_id);
                for (feature, account_id) in &assignments {
                    output.push_str(&format!("- {feature}: {account_id}\n"));
                }
                self.renderer.render(&output)
            }
        }
    }

    pub async fn handle_subject(&self, args: SubjectArgs) -> Result<()> {
        let result = self
            .app
            .classify_subject(&args.into())
            .await
            .context("Failed to classify subject")?;
        self.renderer.render(&result.to_string())
    }

    pub async fn handle_grades_command(&self, command: GradesCommands) -> Result<()> {
        match command {
            GradesCommands::Periods(args) => {
                let outcome = self
                    .app
                    .update_periods(&args.into())
                    .await
                    .context("Failed to update periods")?;
                info!("Periods refresh: {outcome:?}");
                self.renderer.render(&outcome.to_string())
            }
            GradesCommands::Update(args) => {
                let outcome = self
                    .app
                    .update_grades(&args.into())
                    .await
                    .context("Failed to update grades")?;
                info!("Grades refresh: {outcome:?}");
                self.renderer.render(&outcome.to_string())
            }
            GradesCommands::Show(args) => {
                let params = ShowGrades::from(args);
                let state = self.app.grades_state().await;

                let periods = Periods {
                    periods: &state.periods,
                    default_period: state.default_period.as_deref(),
                };
                let report = GradesReport {
                    state: &state,
                    period: params.period.as_deref(),
                };
                self.renderer
                    .render(&format!("# Periods\n\n{periods}\n# Grades\n\n{report}"))
            }
        }
    }
}
