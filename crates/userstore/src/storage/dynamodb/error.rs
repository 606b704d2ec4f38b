//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `userstore_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use userstore_core::storage::RepositoryError;

/// Transport-level failures that never reached the service.
fn transport_failure<E, R>(err: &SdkError<E, R>, operation: &str) -> Option<RepositoryError> {
    match err {
        SdkError::TimeoutError(_) => Some(RepositoryError::ConnectionFailed(format!(
            "{operation} timed out"
        ))),
        SdkError::DispatchFailure(failure) => Some(RepositoryError::ConnectionFailed(format!(
            "{operation} dispatch failed: {failure:?}"
        ))),
        _ => None,
    }
}

fn throughput_exceeded() -> RepositoryError {
    RepositoryError::Throttled("Throughput exceeded, please retry".to_string())
}

fn request_limit_exceeded() -> RepositoryError {
    RepositoryError::Throttled("Request limit exceeded, please retry".to_string())
}

fn internal_server_error() -> RepositoryError {
    RepositoryError::Unavailable("DynamoDB internal server error".to_string())
}

fn table_not_found() -> RepositoryError {
    RepositoryError::QueryFailed("Table not found".to_string())
}

/// Map a Scan SDK error to RepositoryError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> RepositoryError {
    if let Some(failure) = transport_failure(&err, "Scan") {
        return failure;
    }
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => table_not_found(),
        ScanError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
        ScanError::RequestLimitExceeded(_) => request_limit_exceeded(),
        ScanError::InternalServerError(_) => internal_server_error(),
        err => RepositoryError::QueryFailed(format!("Scan failed: {:?}", err)),
    }
}

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    if let Some(failure) = transport_failure(&err, "GetItem") {
        return failure;
    }
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => table_not_found(),
        GetItemError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
        GetItemError::RequestLimitExceeded(_) => request_limit_exceeded(),
        GetItemError::InternalServerError(_) => internal_server_error(),
        err => RepositoryError::QueryFailed(format!("GetItem failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    if let Some(failure) = transport_failure(&err, "PutItem") {
        return failure;
    }
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => table_not_found(),
        PutItemError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
        PutItemError::RequestLimitExceeded(_) => request_limit_exceeded(),
        PutItemError::TransactionConflictException(_) => {
            RepositoryError::Throttled("Transaction conflict, please retry".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        PutItemError::InternalServerError(_) => internal_server_error(),
        err => RepositoryError::QueryFailed(format!("PutItem failed: {:?}", err)),
    }
}

/// Map an UpdateItem SDK error to RepositoryError.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
) -> RepositoryError {
    if let Some(failure) = transport_failure(&err, "UpdateItem") {
        return failure;
    }
    match err.into_service_error() {
        UpdateItemError::ResourceNotFoundException(_) => table_not_found(),
        UpdateItemError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
        UpdateItemError::RequestLimitExceeded(_) => request_limit_exceeded(),
        UpdateItemError::TransactionConflictException(_) => {
            RepositoryError::Throttled("Transaction conflict, please retry".to_string())
        }
        UpdateItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        UpdateItemError::InternalServerError(_) => internal_server_error(),
        err => RepositoryError::QueryFailed(format!("UpdateItem failed: {:?}", err)),
    }
}

/// Map a DeleteItem SDK error to RepositoryError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> RepositoryError {
    if let Some(failure) = transport_failure(&err, "DeleteItem") {
        return failure;
    }
    match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(_) => table_not_found(),
        DeleteItemError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
        DeleteItemError::RequestLimitExceeded(_) => request_limit_exceeded(),
        DeleteItemError::TransactionConflictException(_) => {
            RepositoryError::Throttled("Transaction conflict, please retry".to_string())
        }
        DeleteItemError::InternalServerError(_) => internal_server_error(),
        err => RepositoryError::QueryFailed(format!("DeleteItem failed: {:?}", err)),
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_dynamodb::types::error::{
        InternalServerError, ProvisionedThroughputExceededException, ResourceNotFoundException,
    };

    use super::*;

    #[test]
    fn test_timeout_is_connection_failure() {
        let err: SdkError<GetItemError, ()> = SdkError::timeout_error("deadline elapsed");
        let mapped = map_get_item_error(err);

        assert_eq!(
            mapped,
            RepositoryError::ConnectionFailed("GetItem timed out".to_string())
        );
        assert!(mapped.is_retryable());
    }

    #[test]
    fn test_throughput_exceeded_is_throttled() {
        let err = SdkError::service_error(
            ScanError::ProvisionedThroughputExceededException(
                ProvisionedThroughputExceededException::builder().build(),
            ),
            (),
        );

        assert_eq!(map_scan_error(err), throughput_exceeded());
    }

    #[test]
    fn test_missing_table_is_terminal() {
        let err = SdkError::service_error(
            PutItemError::ResourceNotFoundException(ResourceNotFoundException::builder().build()),
            (),
        );
        let mapped = map_put_item_error(err);

        assert_eq!(mapped, table_not_found());
        assert!(!mapped.is_retryable());
    }

    #[test]
    fn test_internal_server_error_is_unavailable() {
        let err = SdkError::service_error(
            DeleteItemError::InternalServerError(InternalServerError::builder().build()),
            (),
        );

        assert!(matches!(
            map_delete_item_error(err),
            RepositoryError::Unavailable(_)
        ));
    }

    #[test]
    fn test_update_item_request_limit_is_throttled() {
        let err = SdkError::service_error(
            UpdateItemError::RequestLimitExceeded(
                aws_sdk_dynamodb::types::error::RequestLimitExceeded::builder().build(),
            ),
            (),
        );

        assert_eq!(map_update_item_error(err), request_limit_exceeded());
    }
}
