// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Admin command parser.
//!
//! A small closed grammar recognized from the operator identity only. Text
//! from any other identity never parses as an admin command, even when it
//! matches the grammar. Malformed arguments yield a usage message and no
//! state change; text that matches no verb falls through to the customer
//! handlers (the operator is also a customer of the stateless responders).

use sevabot_core::{CounterpartyId, OrderId};

use crate::replies;

/// A recognized operator command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminCommand {
    UpdateStatus { order_id: OrderId, status: String },
    Delete { order_id: OrderId },
    ListPending { counterparty: Option<CounterpartyId> },
    ListCompleted { counterparty: Option<CounterpartyId> },
    GetDocs { order_id: OrderId },
}

/// Outcome of looking at one line of operator text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminParse {
    Command(AdminCommand),
    /// Verb recognized but arguments malformed; reply with usage text.
    Usage(String),
    /// Not an admin command; handle as ordinary customer text.
    NotACommand,
}

/// Parses `text` as an admin command if and only if `sender` is the operator.
pub fn parse(sender: &CounterpartyId, operator_id: &CounterpartyId, text: &str) -> AdminParse {
    if sender != operator_id {
        return AdminParse::NotACommand;
    }

    let mut tokens = text.split_whitespace();
    let Some(verb) = tokens.next() else {
        return AdminParse::NotACommand;
    };
    let args: Vec<&str> = tokens.collect();

    match verb.to_lowercase().as_str() {
        "status" => match args.split_first() {
            // Bare "status" is the customer status-check command, not admin.
            None => AdminParse::NotACommand,
            Some((_, [])) => AdminParse::Usage(replies::status_usage()),
            Some((order_id, rest)) => AdminParse::Command(AdminCommand::UpdateStatus {
                order_id: OrderId(order_id.to_uppercase()),
                status: rest.join(" "),
            }),
        },
        "delete" => match args.as_slice() {
            [order_id] => AdminParse::Command(AdminCommand::Delete {
                order_id: OrderId(order_id.to_uppercase()),
            }),
            _ => AdminParse::Usage(replies::delete_usage()),
        },
        "list" => match args.as_slice() {
            [] => AdminParse::Command(AdminCommand::ListPending { counterparty: None }),
            [target] => AdminParse::Command(AdminCommand::ListPending {
                counterparty: Some(CounterpartyId(target.to_string())),
            }),
            _ => AdminParse::Usage(replies::list_usage()),
        },
        "completed" | "complete" => match args.as_slice() {
            [] => AdminParse::Command(AdminCommand::ListCompleted { counterparty: None }),
            [target] => AdminParse::Command(AdminCommand::ListCompleted {
                counterparty: Some(CounterpartyId(target.to_string())),
            }),
            _ => AdminParse::Usage(replies::list_usage()),
        },
        "get_docs" => match args.as_slice() {
            [order_id] => AdminParse::Command(AdminCommand::GetDocs {
                order_id: OrderId(order_id.to_uppercase()),
            }),
            _ => AdminParse::Usage(replies::get_docs_usage()),
        },
        _ => AdminParse::NotACommand,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operator() -> CounterpartyId {
        CounterpartyId("918080032223@c.us".to_string())
    }

    fn customer() -> CounterpartyId {
        CounterpartyId("919812345678@c.us".to_string())
    }

    #[test]
    fn non_operator_text_never_parses() {
        let result = parse(&customer(), &operator(), "delete WO-1-AAAAAA");
        assert_eq!(result, AdminParse::NotACommand);
    }

    #[test]
    fn status_with_multiword_status_text() {
        let op = operator();
        let result = parse(&op, &op, "status wo-123456-abcdef Payment Pending");
        assert_eq!(
            result,
            AdminParse::Command(AdminCommand::UpdateStatus {
                order_id: OrderId("WO-123456-ABCDEF".into()),
                status: "Payment Pending".into(),
            })
        );
    }

    #[test]
    fn bare_status_falls_through_to_customer_handler() {
        let op = operator();
        assert_eq!(parse(&op, &op, "status"), AdminParse::NotACommand);
    }

    #[test]
    fn status_without_status_text_is_usage() {
        let op = operator();
        assert!(matches!(
            parse(&op, &op, "status WO-1-AAAAAA"),
            AdminParse::Usage(_)
        ));
    }

    #[test]
    fn verbs_are_case_insensitive() {
        let op = operator();
        assert!(matches!(
            parse(&op, &op, "Delete WO-1-AAAAAA"),
            AdminParse::Command(AdminCommand::Delete { .. })
        ));
        assert!(matches!(
            parse(&op, &op, "GET_DOCS wo-1-aaaaaa"),
            AdminParse::Command(AdminCommand::GetDocs { .. })
        ));
    }

    #[test]
    fn list_variants() {
        let op = operator();
        assert_eq!(
            parse(&op, &op, "list"),
            AdminParse::Command(AdminCommand::ListPending { counterparty: None })
        );
        assert_eq!(
            parse(&op, &op, "list 919812345678@c.us"),
            AdminParse::Command(AdminCommand::ListPending {
                counterparty: Some(CounterpartyId("919812345678@c.us".into())),
            })
        );
        assert!(matches!(
            parse(&op, &op, "list of services"),
            AdminParse::Usage(_)
        ));
    }

    #[test]
    fn completed_and_complete_are_synonyms() {
        let op = operator();
        assert_eq!(
            parse(&op, &op, "completed"),
            AdminParse::Command(AdminCommand::ListCompleted { counterparty: None })
        );
        assert_eq!(
            parse(&op, &op, "complete"),
            AdminParse::Command(AdminCommand::ListCompleted { counterparty: None })
        );
    }

    #[test]
    fn get_docs_requires_order_id() {
        let op = operator();
        assert!(matches!(parse(&op, &op, "get_docs"), AdminParse::Usage(_)));
    }

    #[test]
    fn unrelated_text_is_not_a_command() {
        let op = operator();
        assert_eq!(parse(&op, &op, "नमस्कार"), AdminParse::NotACommand);
        assert_eq!(parse(&op, &op, ""), AdminParse::NotACommand);
    }
}
