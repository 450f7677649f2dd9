use reqwest::Method;
use reqwest::multipart::{Form, Part};

use angebot_settings::{CompanySettings, ImageUpload};

use crate::error::{ClientError, ClientResult};
use crate::http::ApiClient;

const PATH: &str = "/settings/me";

impl ApiClient {
    /// `GET /settings/me`.
    pub async fn settings(&self) -> ClientResult<CompanySettings> {
        self.get_json(PATH).await
    }

    /// Like [`settings`](Self::settings), but 404 is `None`.
    pub async fn settings_opt(&self) -> ClientResult<Option<CompanySettings>> {
        match self.settings().await {
            Ok(settings) => Ok(Some(settings)),
            Err(ClientError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Validates locally, then `PUT /settings/me`.
    pub async fn update_settings(&self, settings: &CompanySettings) -> ClientResult<CompanySettings> {
        settings.validate()?;
        self.write_json(Method::PUT, PATH, settings).await
    }

    /// `POST /settings/me/{logo|signature}` as multipart field `file`.
    pub async fn upload_image(&self, upload: &ImageUpload) -> ClientResult<()> {
        let path = format!("{PATH}/{}", upload.kind().endpoint());
        let part = Part::bytes(upload.bytes().to_vec())
            .file_name(upload.file_name().to_string())
            .mime_str(upload.mime_type())
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        let form = Form::new().part("file", part);

        let req = self.authed(Method::POST, &path)?.multipart(form);
        self.send_empty(Method::POST, &path, req).await?;
        tracing::info!(kind = %upload.kind(), size = upload.bytes().len(), "image uploaded");
        Ok(())
    }

    /// Save settings, then upload the logo and signature when given.
    ///
    /// Stops at the first failure; earlier steps stay applied on the backend.
    pub async fn save_settings(
        &self,
        settings: &CompanySettings,
        logo: Option<&ImageUpload>,
        signature: Option<&ImageUpload>,
    ) -> ClientResult<CompanySettings> {
        let saved = self.update_settings(settings).await?;
        for upload in [logo, signature].into_iter().flatten() {
            self.upload_image(upload).await?;
        }
        Ok(saved)
    }
}
