//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `heroes_core::storage`.
//! Service errors are classified by their DynamoDB error code, which every
//! operation's error type exposes through [`ProvideErrorMetadata`].

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::delete_table::DeleteTableError;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use heroes_core::storage::RepositoryError;

/// Maps an SDK error from `operation` to a repository error.
///
/// Requests that never got a response are connection failures. Everything
/// the service answered with is a failed query.
fn map_sdk_error<E, R>(operation: &str, err: SdkError<E, R>) -> RepositoryError
where
    E: ProvideErrorMetadata + Error + 'static,
    R: Debug,
{
    match &err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            RepositoryError::ConnectionFailed(DisplayErrorContext(&err).to_string())
        }
        _ => match err.as_service_error() {
            Some(service) => service_error(operation, service),
            None => RepositoryError::QueryFailed(format!(
                "{operation} failed: {}",
                DisplayErrorContext(&err)
            )),
        },
    }
}

/// Classifies a service error by its DynamoDB error code.
fn service_error<E>(operation: &str, err: &E) -> RepositoryError
where
    E: ProvideErrorMetadata + Debug,
{
    let message = match err.code() {
        Some("ResourceNotFoundException") => "Table not found".to_string(),
        Some("ResourceInUseException") => "Table is in use".to_string(),
        Some("ProvisionedThroughputExceededException") => {
            "Throughput exceeded, please retry".to_string()
        }
        Some("RequestLimitExceeded") => "Request limit exceeded, please retry".to_string(),
        Some("LimitExceededException") => "Table limit exceeded".to_string(),
        Some("ItemCollectionSizeLimitExceededException") => {
            "Item collection size limit exceeded".to_string()
        }
        Some("TransactionConflictException") => "Transaction conflict, please retry".to_string(),
        Some("InternalServerError") => "DynamoDB internal server error".to_string(),
        _ => format!("{operation} failed: {err:?}"),
    };

    RepositoryError::QueryFailed(message)
}

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug>(err: SdkError<GetItemError, R>) -> RepositoryError {
    map_sdk_error("GetItem", err)
}

/// Map a Scan SDK error to RepositoryError.
pub fn map_scan_error<R: Debug>(err: SdkError<ScanError, R>) -> RepositoryError {
    map_sdk_error("Scan", err)
}

/// Map a PutItem SDK error to RepositoryError.
///
/// A failed `attribute_exists` condition means there was no hero to replace.
pub fn map_put_item_error<R: Debug>(
    err: SdkError<PutItemError, R>,
    id: impl Into<String>,
) -> RepositoryError {
    if matches!(
        err.as_service_error(),
        Some(PutItemError::ConditionalCheckFailedException(_))
    ) {
        return RepositoryError::hero_not_found(id);
    }
    map_sdk_error("PutItem", err)
}

/// Map a DeleteItem SDK error to RepositoryError.
pub fn map_delete_item_error<R: Debug>(err: SdkError<DeleteItemError, R>) -> RepositoryError {
    map_sdk_error("DeleteItem", err)
}

/// Map a CreateTable SDK error to RepositoryError.
pub fn map_create_table_error<R: Debug>(err: SdkError<CreateTableError, R>) -> RepositoryError {
    map_sdk_error("CreateTable", err)
}

/// Map a DeleteTable SDK error to RepositoryError.
pub fn map_delete_table_error<R: Debug>(err: SdkError<DeleteTableError, R>) -> RepositoryError {
    map_sdk_error("DeleteTable", err)
}

/// Map a DescribeTable SDK error to RepositoryError.
pub fn map_describe_table_error<R: Debug>(
    err: SdkError<DescribeTableError, R>,
) -> RepositoryError {
    map_sdk_error("DescribeTable", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::error::ErrorMetadata;
    use aws_sdk_dynamodb::types::error::ConditionalCheckFailedException;

    fn get_item_error(code: &str) -> SdkError<GetItemError, ()> {
        SdkError::service_error(
            GetItemError::generic(ErrorMetadata::builder().code(code).build()),
            (),
        )
    }

    #[test]
    fn test_missing_table_is_query_failure() {
        let err = map_get_item_error(get_item_error("ResourceNotFoundException"));

        assert!(matches!(err, RepositoryError::QueryFailed(msg) if msg == "Table not found"));
    }

    #[test]
    fn test_throttling_is_query_failure() {
        let err = map_get_item_error(get_item_error("ProvisionedThroughputExceededException"));

        assert!(matches!(
            err,
            RepositoryError::QueryFailed(msg) if msg.contains("Throughput exceeded")
        ));
    }

    #[test]
    fn test_unknown_code_names_operation() {
        let err = map_get_item_error(get_item_error("SomethingNew"));

        assert!(matches!(
            err,
            RepositoryError::QueryFailed(msg) if msg.starts_with("GetItem failed")
        ));
    }

    #[test]
    fn test_timeout_is_connection_failure() {
        let err: SdkError<ScanError, ()> = SdkError::timeout_error("timed out");

        assert!(matches!(
            map_scan_error(err),
            RepositoryError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn test_failed_condition_is_not_found() {
        let err: SdkError<PutItemError, ()> = SdkError::service_error(
            PutItemError::ConditionalCheckFailedException(
                ConditionalCheckFailedException::builder().build(),
            ),
            (),
        );

        assert!(matches!(
            map_put_item_error(err, "abc"),
            RepositoryError::NotFound { .. }
        ));
    }
}
