use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::config::{Credentials, Region};
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::create_table::{CreateTableError, CreateTableOutput};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use aws_sdk_dynamodb::types::{AttributeDefinition, AttributeValue, KeySchemaElement, KeyType, ProvisionedThroughput, ScalarAttributeType, TableStatus};
use rust_decimal::Decimal;
use tracing::{debug, info};
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::RepositoryStore;

const LOCAL_REGION: &str = "local";
const LOCAL_ACCESS_KEY_ID: &str = "AKIDLOCALDYNAMODB";
const LOCAL_SECRET_ACCESS_KEY: &str = "localdynamodbsecret";

pub async fn create_table(client: &Client, table_name: &str, pk: &str) -> LibraryResult<()> {
    match send_create_table(client, table_name, pk).await {
        Ok(_k) => {
            wait_until_table_status_is_not(client, table_name, TableStatus::Creating).await;
            info!(table = table_name, "created table");
            Ok(())
        }
        Err(err) => Err(create_table_error(table_name, &err)),
    }
}

// Creates the table unless it already exists, returns whether it was created.
// Any other failure, including an unreachable endpoint, is an error.
pub async fn ensure_table(client: &Client, table_name: &str, pk: &str) -> LibraryResult<bool> {
    match send_create_table(client, table_name, pk).await {
        Ok(_k) => {
            wait_until_table_status_is_not(client, table_name, TableStatus::Creating).await;
            info!(table = table_name, "created table");
            Ok(true)
        }
        Err(err) if is_resource_in_use(&err) => {
            debug!(table = table_name, "table already exists");
            Ok(false)
        }
        Err(err) => Err(create_table_error(table_name, &err)),
    }
}

async fn send_create_table(client: &Client, table_name: &str,
                           pk: &str) -> Result<CreateTableOutput, SdkError<CreateTableError>> {
    client
        .create_table()
        .table_name(table_name)
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name(pk)
                .key_type(KeyType::Hash)
                .build(),
        )
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name(pk)
                .attribute_type(ScalarAttributeType::S)
                .build(),
        )
        .provisioned_throughput(
            ProvisionedThroughput::builder()
                .read_capacity_units(10)
                .write_capacity_units(10)
                .build(),
        )
        .send()
        .await
}

fn is_resource_in_use(err: &SdkError<CreateTableError>) -> bool {
    match err {
        SdkError::ServiceError(ctx) => ctx.err().is_resource_in_use_exception(),
        _ => false,
    }
}

fn create_table_error(table_name: &str, err: &SdkError<CreateTableError>) -> LibraryError {
    let (retryable, reason) = retryable_sdk_error(err);
    LibraryError::database_or_unavailable(format!("failed to create {} table due to {}",
                                                  table_name, err).as_str(), reason, retryable)
}

pub async fn delete_table(client: &Client, table_name: &str) -> LibraryResult<()> {
    match client.delete_table().table_name(table_name).send().await {
        Ok(_k) => {
            wait_until_table_status_is_not(client, table_name, TableStatus::Deleting).await;
            Ok(())
        }
        Err(err) => {
            Err(LibraryError::database_or_unavailable(format!("failed to delete {} table due to {}",
                                                              table_name, err).as_str(), None, false))
        }
    }
}

async fn wait_until_table_status_is_not(client: &Client, table_name: &str, other_status: TableStatus) {
    for _i in 0..30 {
        // a deleted table no longer describes, which also ends the wait
        match describe_table(client, table_name).await {
            Ok(status) if status == other_status => {}
            _ => return,
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
}

async fn describe_table(client: &Client, table_name: &str) -> LibraryResult<TableStatus> {
    match client
        .describe_table()
        .table_name(table_name)
        .send()
        .await
    {
        Ok(out) => {
            if let Some(table) = out.table() {
                if let Some(status) = table.table_status() {
                    return Ok(status.clone());
                }
            }
            Err(LibraryError::runtime(format!("failed to describe {} table",
                                              table_name).as_str(), None))
        }
        Err(err) => {
            Err(LibraryError::database_or_unavailable(format!("failed to describe {} table due to {}",
                                                              table_name, err).as_str(), None, false))
        }
    }
}

pub fn parse_string_attribute(name: &str, map: &HashMap<String, AttributeValue>) -> Option<String> {
    if let Some(AttributeValue::S(str)) = map.get(name) {
        return Some(str.clone());
    }
    None
}

// Numbers travel as their decimal text both ways, so 19.95 stays 19.95.
pub fn parse_decimal_attribute(name: &str, map: &HashMap<String, AttributeValue>) -> LibraryResult<Option<Decimal>> {
    if let Some(AttributeValue::N(str)) = map.get(name) {
        return Ok(Some(Decimal::from_str(str)?));
    }
    Ok(None)
}

pub fn decimal_attribute(value: Decimal) -> AttributeValue {
    AttributeValue::N(value.normalize().to_string())
}

// Filter over arbitrary attribute names. Names and values go through
// placeholders because words like `year` are reserved, see
// https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/ReservedWords.html
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FilterExpr {
    expression: String,
    names: HashMap<String, String>,
    values: HashMap<String, AttributeValue>,
}

impl FilterExpr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, attribute: &str, value: AttributeValue) -> Self {
        let name = self.add_name(attribute);
        let val = self.add_value(value);
        self.push(format!("{} = {}", name, val));
        self
    }

    // BETWEEN is inclusive at both ends
    pub fn between(mut self, attribute: &str, low: AttributeValue, high: AttributeValue) -> Self {
        let name = self.add_name(attribute);
        let low = self.add_value(low);
        let high = self.add_value(high);
        self.push(format!("{} BETWEEN {} AND {}", name, low, high));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.expression.is_empty()
    }

    pub fn expression(&self) -> &str {
        self.expression.as_str()
    }

    fn add_name(&mut self, attribute: &str) -> String {
        let key = format!("#f{}", self.names.len());
        self.names.insert(key.clone(), attribute.to_string());
        key
    }

    fn add_value(&mut self, value: AttributeValue) -> String {
        let key = format!(":v{}", self.values.len());
        self.values.insert(key.clone(), value);
        key
    }

    fn push(&mut self, clause: String) {
        if self.expression.is_empty() {
            self.expression.push_str(clause.as_str());
        } else {
            self.expression.push_str(format!(" AND {}", clause).as_str());
        }
    }
}

// Scans every page of the table, the filter is applied server side per page.
pub async fn scan_items(client: &Client, table_name: &str,
                        filter: &FilterExpr) -> LibraryResult<Vec<HashMap<String, AttributeValue>>> {
    let mut items = vec![];
    let mut exclusive_start_key: Option<HashMap<String, AttributeValue>> = None;
    loop {
        let mut request = client
            .scan()
            .table_name(table_name)
            .consistent_read(true)
            .set_exclusive_start_key(exclusive_start_key.take());
        if !filter.is_empty() {
            request = request
                .filter_expression(filter.expression.as_str())
                .set_expression_attribute_names(Some(filter.names.clone()))
                .set_expression_attribute_values(Some(filter.values.clone()));
        }
        let out = request.send().await.map_err(LibraryError::from)?;
        if let Some(page) = out.items() {
            items.extend_from_slice(page);
        }
        match out.last_evaluated_key() {
            Some(key) if !key.is_empty() => exclusive_start_key = Some(key.clone()),
            _ => break,
        }
    }
    debug!(table = table_name, filter = filter.expression(), count = items.len(), "scanned table");
    Ok(items)
}

// helper method to build the single db-client shared by the session
pub async fn build_db_client(config: &Configuration) -> Client {
    match config.store {
        RepositoryStore::LocalDynamoDB => {
            // See https://docs.aws.amazon.com/sdk-for-rust/latest/dg/dynamodb-local.html
            let region = config.region.clone().unwrap_or(LOCAL_REGION.to_string());
            let access_key_id = config.access_key_id.clone().unwrap_or(LOCAL_ACCESS_KEY_ID.to_string());
            let secret_access_key = config.secret_access_key.clone().unwrap_or(LOCAL_SECRET_ACCESS_KEY.to_string());
            let dynamodb_local_config = aws_sdk_dynamodb::Config::builder()
                .region(Region::new(region))
                .credentials_provider(
                    Credentials::new(access_key_id, secret_access_key, None, None, "bookmanager"))
                .endpoint_url(config.endpoint.as_str())
                .build();
            Client::from_conf(dynamodb_local_config)
        }
        _ => {
            //Get config from environment.
            let mut loader = aws_config::from_env();
            if let Some(region) = &config.region {
                loader = loader.region(Region::new(region.clone()));
            }
            if let (Some(key), Some(secret)) = (&config.access_key_id, &config.secret_access_key) {
                loader = loader.credentials_provider(
                    Credentials::new(key.clone(), secret.clone(), None, None, "bookmanager"));
            }
            let sdk_config = loader.load().await;
            Client::new(&sdk_config)
        }
    }
}

impl From<SdkError<UpdateItemError>> for LibraryError {
    fn from(err: SdkError<UpdateItemError>) -> Self {
        let (retryable, reason) = retryable_sdk_error(&err);
        LibraryError::database_or_unavailable(format!("{:?}", err).as_str(), reason, retryable)
    }
}

impl From<SdkError<PutItemError>> for LibraryError {
    fn from(err: SdkError<PutItemError>) -> Self {
        let (retryable, reason) = retryable_sdk_error(&err);
        LibraryError::database_or_unavailable(format!("{:?}", err).as_str(), reason, retryable)
    }
}

impl From<SdkError<DeleteItemError>> for LibraryError {
    fn from(err: SdkError<DeleteItemError>) -> Self {
        let (retryable, reason) = retryable_sdk_error(&err);
        LibraryError::database_or_unavailable(format!("{:?}", err).as_str(), reason, retryable)
    }
}

impl From<SdkError<ScanError>> for LibraryError {
    fn from(err: SdkError<ScanError>) -> Self {
        let (retryable, reason) = retryable_sdk_error(&err);
        LibraryError::database_or_unavailable(format!("{:?}", err).as_str(), reason, retryable)
    }
}

fn retryable_sdk_error<T>(err: &SdkError<T>) -> (bool, Option<String>) {
    match err {
        SdkError::ConstructionFailure(_) => { (false, Some("ConstructionFailure".to_string())) }
        SdkError::TimeoutError(_) => { (true, Some("TimeoutError".to_string())) }
        SdkError::DispatchFailure(_) => { (true, Some("DispatchFailure".to_string())) }
        SdkError::ResponseError { .. } => { (true, Some("ResponseError".to_string())) }
        SdkError::ServiceError(ctx) => {
            (ctx.raw().http().status().is_server_error() || has_exceeded_limit(ctx.raw().http().body().bytes()), Some(ctx.raw().http().status().to_string()))
        }
        _ => { (true, Some("Unknown".to_string())) }
    }
}

// throughput errors carry "...Exceeded..." in the body
fn has_exceeded_limit(opts: Option<&[u8]>) -> bool {
    if let Some(b) = opts {
        return b.windows(6).any(|w| w == b"ceeded");
    }
    false
}
