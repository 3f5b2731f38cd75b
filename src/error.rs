use std::fmt::{Debug, Display};
use std::io::Error as IoError;

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError, UrlencodedError};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use derivative::Derivative;
use mongodb::bson::ser::Error as BsonError;
use mongodb::error::Error as DatabaseError;
use serde::{Serialize, Serializer};

use crate::campaign::CampaignId;
use crate::catalog::{CatalogId, ProductId};
use crate::order::OrderId;
use crate::profile::ProfileId;
use crate::share::SharedCampaignId;

#[derive(Debug, Serialize, Derivative)]
#[derivative(PartialEq, Eq)]
#[serde(untagged)]
pub enum Error {
    // 400
    #[serde(serialize_with = "display")]
    InvalidJson(#[derivative(PartialEq = "ignore")] JsonPayloadError),
    #[serde(serialize_with = "display")]
    InvalidPath(#[derivative(PartialEq = "ignore")] PathError),
    #[serde(serialize_with = "display")]
    InvalidForm(#[derivative(PartialEq = "ignore")] UrlencodedError),
    #[serde(serialize_with = "display")]
    InvalidQuery(#[derivative(PartialEq = "ignore")] QueryPayloadError),
    EmptyLineItems {
        campaign_id: CampaignId,
    },
    InvalidLineItemQuantity {
        product_id: ProductId,
        quantity: i32,
    },
    ProductDoesNotExistInCatalog {
        catalog_id: CatalogId,
        product_id: ProductId,
    },
    MissingCampaignField {
        field: &'static str,
    },

    // 404
    PathDoesNotExist,
    ProfileDoesNotExist {
        profile_id: ProfileId,
    },
    CampaignDoesNotExist {
        campaign_id: CampaignId,
    },
    CatalogDoesNotExist {
        catalog_id: CatalogId,
    },
    SharedCampaignDoesNotExist {
        shared_campaign_id: SharedCampaignId,
    },
    OrderDoesNotExistInCampaign {
        campaign_id: CampaignId,
        order_id: OrderId,
    },

    // 500
    #[serde(serialize_with = "display")]
    FailedDatabaseCall(#[derivative(PartialEq = "ignore")] DatabaseError),
    #[serde(serialize_with = "display")]
    FailedToSerializeToBson(#[derivative(PartialEq = "ignore")] BsonError),
    #[serde(serialize_with = "display")]
    IoError(#[derivative(PartialEq = "ignore")] IoError),
}

impl Error {
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidJson(_) => "E4001000",
            Error::InvalidPath(_) => "E4001001",
            Error::InvalidForm(_) => "E4001002",
            Error::InvalidQuery(_) => "E4001003",
            Error::EmptyLineItems { .. } => "E4001004",
            Error::InvalidLineItemQuantity { .. } => "E4001005",
            Error::ProductDoesNotExistInCatalog { .. } => "E4001006",
            Error::MissingCampaignField { .. } => "E4001007",
            Error::PathDoesNotExist => "E4041000",
            Error::ProfileDoesNotExist { .. } => "E4041001",
            Error::CampaignDoesNotExist { .. } => "E4041002",
            Error::CatalogDoesNotExist { .. } => "E4041003",
            Error::SharedCampaignDoesNotExist { .. } => "E4041004",
            Error::OrderDoesNotExistInCampaign { .. } => "E4041005",
            Error::FailedDatabaseCall(_) => "E5001000",
            Error::FailedToSerializeToBson(_) => "E5001001",
            Error::IoError(_) => "E5001002",
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            Error::InvalidJson(_) => "The given json could not be parsed",
            Error::InvalidPath(_) => "The given path could not be parsed",
            Error::InvalidForm(_) => "The given form could not be parsed",
            Error::InvalidQuery(_) => "The given query could not be parsed",
            Error::EmptyLineItems { .. } => "The requested order does not have any line items",
            Error::InvalidLineItemQuantity { .. } => {
                "The requested line item quantity must be at least 1"
            }
            Error::ProductDoesNotExistInCatalog { .. } => {
                "The requested product was not found in the campaign's catalog"
            }
            Error::MissingCampaignField { .. } => {
                "The requested campaign is missing a required field"
            }
            Error::PathDoesNotExist => "The requested path was not found",
            Error::ProfileDoesNotExist { .. } => "The requested profile was not found",
            Error::CampaignDoesNotExist { .. } => "The requested campaign was not found",
            Error::CatalogDoesNotExist { .. } => "The requested catalog was not found",
            Error::SharedCampaignDoesNotExist { .. } => {
                "The requested shared campaign was not found"
            }
            Error::OrderDoesNotExistInCampaign { .. } => {
                "The requested order was not found in the campaign"
            }
            Error::FailedDatabaseCall(_) => {
                "An error occurred when communicating with the database"
            }
            Error::FailedToSerializeToBson(_) => {
                "An error occurred when serializing an object to bson"
            }
            Error::IoError(_) => "An error occurred during an I/O operation",
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Error::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Error::InvalidForm(_) => StatusCode::BAD_REQUEST,
            Error::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Error::EmptyLineItems { .. } => StatusCode::BAD_REQUEST,
            Error::InvalidLineItemQuantity { .. } => StatusCode::BAD_REQUEST,
            Error::ProductDoesNotExistInCatalog { .. } => StatusCode::BAD_REQUEST,
            Error::MissingCampaignField { .. } => StatusCode::BAD_REQUEST,
            Error::PathDoesNotExist => StatusCode::NOT_FOUND,
            Error::ProfileDoesNotExist { .. } => StatusCode::NOT_FOUND,
            Error::CampaignDoesNotExist { .. } => StatusCode::NOT_FOUND,
            Error::CatalogDoesNotExist { .. } => StatusCode::NOT_FOUND,
            Error::SharedCampaignDoesNotExist { .. } => StatusCode::NOT_FOUND,
            Error::OrderDoesNotExistInCampaign { .. } => StatusCode::NOT_FOUND,
            Error::FailedDatabaseCall(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::FailedToSerializeToBson(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        #[derive(Serialize)]
        struct Dummy<'a> {
            error_code: &'static str,
            error_message: &'static str,
            error_meta: &'a Error,
        }

        HttpResponse::build(self.status_code()).json(&Dummy {
            error_code: self.error_code(),
            error_message: self.error_message(),
            error_meta: self,
        })
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        Debug::fmt(self, f)
    }
}

impl From<DatabaseError> for Error {
    fn from(error: DatabaseError) -> Error {
        Error::FailedDatabaseCall(error)
    }
}

impl From<BsonError> for Error {
    fn from(error: BsonError) -> Error {
        Error::FailedToSerializeToBson(error)
    }
}

impl From<IoError> for Error {
    fn from(error: IoError) -> Error {
        Error::IoError(error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidJson(err) => Some(err),
            Error::InvalidPath(err) => Some(err),
            Error::InvalidForm(err) => Some(err),
            Error::InvalidQuery(err) => Some(err),
            Error::FailedDatabaseCall(err) => Some(err),
            Error::FailedToSerializeToBson(err) => Some(err),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

fn display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}
