//! # plantilla-view
//!
//! The view controller: each entry point performs one fetch, an optional
//! sort or filter, and one render into the [`Article`].
//!
//! A failed fetch raises a single alert, logs the error, and leaves the
//! article untouched. The error is still returned so hosts can set an exit
//! status, but it has already been reported to the user.

mod alert;

pub use alert::{Alert, RecordingAlert};

use plantilla_core::{
    Combinator, CompositeField, MultiFieldFilter, NumericField, Record, TextField,
    filter_by_multiple_fields, filter_by_name, sort_alphabetically, sort_by_composite_field,
    sort_by_field, sort_by_numeric_field,
};
use plantilla_gateway::{GatewayClient, GatewayError, routes};
use plantilla_render::{Article, PlayerTemplate, TITLE_LIST_ALL, views};
use serde_json::Value;

/// Message shown when any gateway request fails, including HTTP error
/// statuses and bodies that are not JSON.
pub const GATEWAY_ALERT: &str = "Error: No se han podido acceder al API Gateway";

pub struct PlantillaView<A, N> {
    gateway: GatewayClient,
    article: A,
    alert: N,
}

impl<A: Article, N: Alert> PlantillaView<A, N> {
    pub fn new(gateway: GatewayClient, article: A, alert: N) -> Self {
        Self {
            gateway,
            article,
            alert,
        }
    }

    pub const fn article(&self) -> &A {
        &self.article
    }

    pub const fn alerts(&self) -> &N {
        &self.alert
    }

    // ── Home / about ───────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns the [`GatewayError`] after alerting.
    pub async fn process_home(&mut self) -> Result<(), GatewayError> {
        let body = self.fetch_route(routes::HOME).await?;
        views::show_home(&mut self.article, Some(&body));
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the [`GatewayError`] after alerting.
    pub async fn process_about(&mut self) -> Result<(), GatewayError> {
        let body = self.fetch_route(routes::ABOUT).await?;
        views::show_about(&mut self.article, Some(&body));
        Ok(())
    }

    // ── Listings ───────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns the [`GatewayError`] after alerting.
    pub async fn show_all_players(&mut self) -> Result<(), GatewayError> {
        let records = self.fetch_all().await?;
        views::list_all(&mut self.article, &records);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the [`GatewayError`] after alerting.
    pub async fn show_names_only(&mut self) -> Result<(), GatewayError> {
        let records = self.fetch_all().await?;
        views::list_names(&mut self.article, &records);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the [`GatewayError`] after alerting.
    pub async fn show_alphabetically(&mut self) -> Result<(), GatewayError> {
        let mut records = self.fetch_all().await?;
        sort_alphabetically(&mut records);
        views::list_names(&mut self.article, &records);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the [`GatewayError`] after alerting.
    pub async fn show_by_field(&mut self, field: TextField) -> Result<(), GatewayError> {
        let mut records = self.fetch_all().await?;
        sort_by_field(&mut records, field);
        views::list_all(&mut self.article, &records);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the [`GatewayError`] after alerting.
    pub async fn show_by_composite_field(
        &mut self,
        field: CompositeField,
    ) -> Result<(), GatewayError> {
        let mut records = self.fetch_all().await?;
        sort_by_composite_field(&mut records, field);
        views::list_all(&mut self.article, &records);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the [`GatewayError`] after alerting.
    pub async fn show_by_numeric_field(&mut self, field: NumericField) -> Result<(), GatewayError> {
        let mut records = self.fetch_all().await?;
        sort_by_numeric_field(&mut records, field);
        views::list_all(&mut self.article, &records);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the [`GatewayError`] after alerting.
    pub async fn show_one_player(&mut self, id: &str) -> Result<(), GatewayError> {
        let record = self.fetch_one(id).await?;
        views::show_one(&mut self.article, &record);
        Ok(())
    }

    // ── Filters ────────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns the [`GatewayError`] after alerting.
    pub async fn show_by_name(&mut self, name: &str) -> Result<(), GatewayError> {
        let records = filter_by_name(self.fetch_all().await?, name);
        views::list_all(&mut self.article, &records);
        Ok(())
    }

    /// `Combinator::All` for the AND search, `Combinator::Any` for OR.
    ///
    /// # Errors
    ///
    /// Returns the [`GatewayError`] after alerting.
    pub async fn show_by_multiple(
        &mut self,
        filter: &MultiFieldFilter,
        combinator: Combinator,
    ) -> Result<(), GatewayError> {
        let records = filter_by_multiple_fields(self.fetch_all().await?, filter, combinator);
        views::list_all(&mut self.article, &records);
        Ok(())
    }

    /// Render every record through `template` and show the concatenation.
    ///
    /// # Errors
    ///
    /// Returns the [`GatewayError`] after alerting.
    pub async fn show_with_template(
        &mut self,
        template: &PlayerTemplate,
    ) -> Result<(), GatewayError> {
        let records = self.fetch_all().await?;
        self.article
            .update(TITLE_LIST_ALL, &template.render_all(&records));
        Ok(())
    }

    // ── Fetch with reporting ───────────────────────────────────────

    async fn fetch_route(&mut self, route: &str) -> Result<Value, GatewayError> {
        let result = self.gateway.fetch_route(route).await;
        self.report(result)
    }

    async fn fetch_all(&mut self) -> Result<Vec<Record>, GatewayError> {
        let result = self.gateway.fetch_all().await;
        self.report(result)
    }

    async fn fetch_one(&mut self, id: &str) -> Result<Record, GatewayError> {
        let result = self.gateway.fetch_one(id).await;
        self.report(result)
    }

    fn report<T>(&mut self, result: Result<T, GatewayError>) -> Result<T, GatewayError> {
        result.inspect_err(|error| {
            tracing::error!(%error, gateway = self.gateway.base_url(), "gateway request failed");
            self.alert.alert(GATEWAY_ALERT);
        })
    }
}
