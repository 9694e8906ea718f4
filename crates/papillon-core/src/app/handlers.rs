//! Operations exposed to interfaces, returning display wrappers.

use log::info;
use tokio::task;

use super::Papillon;
use crate::{
    display::{Accounts, CreateResult, DeleteResult, QrCodeSymbol, QrCodes, SubjectResult},
    error::{PapillonError, Result},
    grades::RefreshOutcome,
    models::{Account, AccountService, GradesState, QrCode},
    params::{
        AddAccount, AddQrCode, AddQrCodeImage, ClassifySubject, Id, LinkFeature, UpdateGrades,
        UpdatePeriods,
    },
    qr_image,
    stores::FeatureAccounts,
};

impl Papillon {
    /// Stores a new QR code.
    ///
    /// # Errors
    ///
    /// Returns `PapillonError::InvalidInput` for a blank name or payload.
    pub async fn add_qrcode(&self, params: &AddQrCode) -> Result<CreateResult<QrCode>> {
        let code = self.qrcodes.add(&params.name, &params.data).await?;
        Ok(CreateResult::new(code))
    }

    /// Stores the first QR code found in a picture.
    ///
    /// # Errors
    ///
    /// Returns `PapillonError::FileSystem` if the image cannot be read,
    /// `PapillonError::QrImage` if it holds no readable code, and
    /// `PapillonError::InvalidInput` for a blank name or payload.
    pub async fn add_qrcode_from_image(
        &self,
        params: &AddQrCodeImage,
    ) -> Result<CreateResult<QrCode>> {
        let path = params.path.clone();
        let data = task::spawn_blocking(move || qr_image::decode_file(&path))
            .await
            .map_err(PapillonError::join)??;
        info!("Read QR code '{}' from {}", params.name, params.path.display());

        let code = self.qrcodes.add(&params.name, &data).await?;
        Ok(CreateResult::new(code))
    }

    pub async fn list_qrcodes(&self) -> QrCodes {
        QrCodes(self.qrcodes.list().await)
    }

    pub async fn show_qrcode(&self, params: &Id) -> Option<QrCode> {
        self.qrcodes.get(&params.id).await
    }

    /// Looks up a QR code and draws its symbol.
    ///
    /// # Errors
    ///
    /// Returns `PapillonError::QrImage` if the payload does not fit in a QR
    /// symbol.
    pub async fn show_qrcode_symbol(&self, params: &Id) -> Result<Option<QrCodeSymbol>> {
        let Some(code) = self.qrcodes.get(&params.id).await else {
            return Ok(None);
        };
        let blocks = qr_image::render_blocks(&code.data)?;
        Ok(Some(QrCodeSymbol { code, blocks }))
    }

    /// Removes a QR code; `None` if no code has that id.
    pub async fn remove_qrcode(&self, params: &Id) -> Result<Option<DeleteResult<QrCode>>> {
        Ok(self.qrcodes.remove(&params.id).await?.map(DeleteResult::new))
    }

    /// Registers an account with a fresh local id.
    ///
    /// # Errors
    ///
    /// Returns `PapillonError::InvalidInput` for a blank name.
    pub async fn add_account(&self, params: &AddAccount) -> Result<CreateResult<Account>> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(PapillonError::invalid_input("name").with_reason("Name cannot be empty"));
        }

        let mut account = Account::new(params.service, name);
        if let Some(provider) = &params.identity_provider {
            account = account.with_identity_provider(provider.trim());
        }
        for feature in &params.disabled_features {
            account = account.with_disabled_feature(*feature);
        }

        let account = self.accounts.add(account).await?;
        Ok(CreateResult::new(account))
    }

    pub async fn list_accounts(&self) -> Accounts {
        Accounts(self.accounts.list().await)
    }

    /// Removes an account. A multi-service account also loses its feature
    /// assignments.
    pub async fn remove_account(&self, params: &Id) -> Result<Option<DeleteResult<Account>>> {
        let Some(account) = self.accounts.remove(&params.id).await? else {
            return Ok(None);
        };

        if account.service == AccountService::PapillonMultiService {
            self.multi_service.remove_space(&account.local_id).await?;
        }
        Ok(Some(DeleteResult::new(account)))
    }

    /// Delegates a feature of a multi-service space to another account and
    /// returns the space's assignments.
    ///
    /// # Errors
    ///
    /// Returns `PapillonError::AccountNotFound` if either account is unknown
    /// and `PapillonError::InvalidInput` if the space is not a multi-service
    /// account or points at itself.
    pub async fn link_feature(&self, params: &LinkFeature) -> Result<FeatureAccounts> {
        let space = self.accounts.require(&params.space_id).await?;
        if space.service != AccountService::PapillonMultiService {
            return Err(PapillonError::invalid_input("space_id").with_reason(format!(
                "Account {} is a {} account, not a multi-service space",
                space.local_id, space.service
            )));
        }
        if params.space_id == params.account_id {
            return Err(PapillonError::invalid_input("account_id")
                .with_reason("A space cannot delegate to itself"));
        }
        self.accounts.require(&params.account_id).await?;

        self.multi_service
            .set_feature_account(&params.space_id, params.feature, &params.account_id)
            .await?;
        Ok(self.multi_service.space(&params.space_id).await)
    }

    /// Classifies a subject label for an account.
    pub async fn classify_subject(&self, params: &ClassifySubject) -> Result<SubjectResult> {
        let data = self
            .subjects
            .subject_data(&params.account_id, &params.entry)
            .await?;
        Ok(SubjectResult {
            entry: params.entry.clone(),
            data,
        })
    }

    /// Refreshes the grading periods of an account.
    pub async fn update_periods(&self, params: &UpdatePeriods) -> Result<RefreshOutcome> {
        let account = self.accounts.require(&params.account_id).await?;
        self.grades.update_grades_periods(&account).await
    }

    /// Refreshes the grades of one period, the stored default if none given.
    ///
    /// # Errors
    ///
    /// Returns `PapillonError::InvalidInput` when no period is given and no
    /// default period is stored.
    pub async fn update_grades(&self, params: &UpdateGrades) -> Result<RefreshOutcome> {
        let account = self.accounts.require(&params.account_id).await?;

        let period = match &params.period {
            Some(period) => period.clone(),
            None => self
                .grades_store()
                .state()
                .await
                .default_period
                .ok_or_else(|| {
                    PapillonError::invalid_input("period")
                        .with_reason("No period given and no default period stored")
                })?,
        };

        info!("Updating grades of account {} for '{period}'", account.local_id);
        self.grades
            .update_grades_and_averages(&account, &period)
            .await
    }

    pub async fn grades_state(&self) -> GradesState {
        self.grades_store().state().await
    }
}
