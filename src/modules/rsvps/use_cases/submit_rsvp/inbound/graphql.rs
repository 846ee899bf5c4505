use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult, SimpleObject};

use crate::modules::rsvps::use_cases::submit_rsvp::command::SubmitRsvp;
use crate::modules::rsvps::use_cases::submit_rsvp::handler::{ApplicationError, SubmitReceipt};
use crate::modules::rsvps::use_cases::sync_guest_list::inbound::graphql::GqlRsvpEntry;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlSubmitReceipt {
    pub entry: GqlRsvpEntry,
    pub delivered: bool,
    pub stored: bool,
    pub error: Option<String>,
}

impl From<SubmitReceipt> for GqlSubmitReceipt {
    fn from(receipt: SubmitReceipt) -> Self {
        Self {
            delivered: receipt.delivered(),
            stored: receipt.stored(),
            error: receipt.error_message().map(str::to_string),
            entry: receipt.entry.into(),
        }
    }
}

#[derive(Default)]
pub struct SubmitRsvpMutation;

#[Object]
impl SubmitRsvpMutation {
    /// Validation failures come back as an error whose extensions map each field to its message.
    async fn submit_rsvp(
        &self,
        context: &Context<'_>,
        name: String,
        email: String,
        guest_count: String,
        message: Option<String>,
    ) -> GqlResult<GqlSubmitReceipt> {
        let state = context.data_unchecked::<AppState>();
        let command = SubmitRsvp {
            name,
            email,
            guest_count,
            message,
        };

        match state.submit_handler.handle(command).await {
            Ok(receipt) => Ok(receipt.into()),
            Err(ApplicationError::Validation(errors)) => {
                let fields = errors.by_field();
                Err(async_graphql::Error::new(errors.to_string()).extend_with(|_, extensions| {
                    for (field, message) in fields {
                        extensions.set(field.as_str(), message);
                    }
                }))
            }
        }
    }
}
