//! HubDB table, column, and row operations.

use serde_json::Value;

use crate::client::Client;
use crate::endpoint::{Endpoint, FlagEndpoint, Shape, SuccessRule};
use crate::envelope::Envelope;

const TABLE_LIST: Endpoint = Endpoint::get("/cms/v3/hubdb/tables", Shape::Results);
const TABLE_LOAD: Endpoint = Endpoint::get("/cms/v3/hubdb/tables/{table}", Shape::Object);
const TABLE_CREATE: Endpoint = Endpoint::post("/cms/v3/hubdb/tables", Shape::Object);
const TABLE_UPDATE: FlagEndpoint =
    FlagEndpoint::patch("/cms/v3/hubdb/tables/{table}", SuccessRule::Under300);
const TABLE_DELETE: FlagEndpoint =
    FlagEndpoint::delete("/cms/v3/hubdb/tables/{table}", SuccessRule::NoContent);
const TABLE_PUBLISH: FlagEndpoint = FlagEndpoint::post(
    "/cms/v3/hubdb/tables/{table}/draft/publish",
    SuccessRule::Under300,
);

const COLUMNS: Endpoint = Endpoint::get("/cms/v3/hubdb/tables/{table}/columns", Shape::Results);
const COLUMN_CREATE: Endpoint =
    Endpoint::post("/cms/v3/hubdb/tables/{table}/columns", Shape::Object);
const COLUMN_UPDATE: FlagEndpoint = FlagEndpoint::patch(
    "/cms/v3/hubdb/tables/{table}/columns/{columnName}",
    SuccessRule::Under300,
);
const COLUMN_DELETE: FlagEndpoint = FlagEndpoint::delete(
    "/cms/v3/hubdb/tables/{table}/columns/{columnName}",
    SuccessRule::NoContent,
);

const ROWS: Endpoint = Endpoint::get("/cms/v3/hubdb/tables/{table}/rows", Shape::Results);
const ROW_LOAD: Endpoint = Endpoint::get("/cms/v3/hubdb/tables/{table}/rows/{rowId}", Shape::Object);
const ROW_CREATE: Endpoint = Endpoint::post("/cms/v3/hubdb/tables/{table}/rows", Shape::Object);
const ROW_UPDATE: FlagEndpoint = FlagEndpoint::patch(
    "/cms/v3/hubdb/tables/{table}/rows/{rowId}",
    SuccessRule::Under300,
);
const ROW_DELETE: FlagEndpoint = FlagEndpoint::delete(
    "/cms/v3/hubdb/tables/{table}/rows/{rowId}",
    SuccessRule::NoContent,
);
const ROWS_DRAFT: Endpoint =
    Endpoint::get("/cms/v3/hubdb/tables/{table}/rows/draft", Shape::Results);

/// Client for HubDB.
///
/// Tables are addressed by id or name throughout.
#[derive(Clone, Debug)]
pub struct HubDbClient {
    client: Client,
}

impl HubDbClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists all tables.
    pub async fn table_list(&self) -> Envelope {
        self.client.dispatch(&TABLE_LIST, &[], &[], None).await
    }

    /// Loads one table's schema.
    pub async fn table_load(&self, table: &str) -> Envelope {
        self.client.dispatch(&TABLE_LOAD, &[("table", table)], &[], None).await
    }

    /// Creates a table from a raw definition body.
    pub async fn table_create(&self, data: Value) -> Envelope {
        self.client.dispatch(&TABLE_CREATE, &[], &[], Some(data)).await
    }

    /// Updates a table's schema; succeeds on any status below 300.
    pub async fn table_update(&self, table: &str, data: Value) -> bool {
        self.client
            .dispatch_flag(&TABLE_UPDATE, &[("table", table)], &[], Some(data))
            .await
    }

    /// Deletes a table; succeeds only on 204.
    pub async fn table_delete(&self, table: &str) -> bool {
        self.client
            .dispatch_flag(&TABLE_DELETE, &[("table", table)], &[], None)
            .await
    }

    /// Publishes a table's draft; succeeds on any status below 300.
    pub async fn table_publish(&self, table: &str) -> bool {
        self.client
            .dispatch_flag(&TABLE_PUBLISH, &[("table", table)], &[], None)
            .await
    }

    /// Lists a table's columns.
    pub async fn columns(&self, table: &str) -> Envelope {
        self.client.dispatch(&COLUMNS, &[("table", table)], &[], None).await
    }

    /// Adds a column to a table.
    pub async fn column_create(&self, table: &str, data: Value) -> Envelope {
        self.client
            .dispatch(&COLUMN_CREATE, &[("table", table)], &[], Some(data))
            .await
    }

    /// Updates a column; succeeds on any status below 300.
    pub async fn column_update(&self, table: &str, column_name: &str, data: Value) -> bool {
        self.client
            .dispatch_flag(
                &COLUMN_UPDATE,
                &[("table", table), ("columnName", column_name)],
                &[],
                Some(data),
            )
            .await
    }

    /// Deletes a column; succeeds only on 204.
    pub async fn column_delete(&self, table: &str, column_name: &str) -> bool {
        self.client
            .dispatch_flag(
                &COLUMN_DELETE,
                &[("table", table), ("columnName", column_name)],
                &[],
                None,
            )
            .await
    }

    /// Fetches a table's published rows with pagination parameters.
    pub async fn rows(&self, table: &str, limit: u32, offset: u32) -> Envelope {
        let limit = limit.to_string();
        let offset = offset.to_string();
        self.client
            .dispatch(
                &ROWS,
                &[("table", table)],
                &[("limit", &limit), ("offset", &offset)],
                None,
            )
            .await
    }

    /// Loads one row.
    pub async fn row_load(&self, table: &str, row_id: &str) -> Envelope {
        self.client
            .dispatch(&ROW_LOAD, &[("table", table), ("rowId", row_id)], &[], None)
            .await
    }

    /// Adds a row to a table.
    pub async fn row_create(&self, table: &str, data: Value) -> Envelope {
        self.client
            .dispatch(&ROW_CREATE, &[("table", table)], &[], Some(data))
            .await
    }

    /// Updates a row; succeeds on any status below 300.
    pub async fn row_update(&self, table: &str, row_id: &str, data: Value) -> bool {
        self.client
            .dispatch_flag(
                &ROW_UPDATE,
                &[("table", table), ("rowId", row_id)],
                &[],
                Some(data),
            )
            .await
    }

    /// Deletes a row; succeeds only on 204.
    pub async fn row_delete(&self, table: &str, row_id: &str) -> bool {
        self.client
            .dispatch_flag(&ROW_DELETE, &[("table", table), ("rowId", row_id)], &[], None)
            .await
    }

    /// Fetches a table's draft rows.
    pub async fn rows_draft(&self, table: &str, limit: u32, offset: u32) -> Envelope {
        let limit = limit.to_string();
        let offset = offset.to_string();
        self.client
            .dispatch(
                &ROWS_DRAFT,
                &[("table", table)],
                &[("limit", &limit), ("offset", &offset)],
                None,
            )
            .await
    }

    /// Fetches a table's published rows; alias entry kept distinct from
    /// [`Self::rows`] because the source surface exposes both.
    pub async fn rows_published(&self, table: &str, limit: u32, offset: u32) -> Envelope {
        self.rows(table, limit, offset).await
    }
}
