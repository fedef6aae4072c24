// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User-facing reply text.
//!
//! Customer-facing strings are Marathi, matching the deployment audience.
//! Everything the engine or lifecycle manager says to a counterparty is
//! assembled here so the state machine code stays free of copy.

use sevabot_core::Order;

/// Command menu appended to customer-facing replies.
pub const CUSTOMER_FOOTER: &str = "\n\n📌 कमांड:\n- हाय / hi / hello / hey\n- सेवांची यादी / service list / list of services\n- कागदपत्र कोणती लागतात? / documents list / list of document\n- सेवा शुल्क काय आहे? / charges / service charges\n- कर्मचाऱ्यांशी संपर्क करायचा आहे\n- कागदपत्र पाठवू का? / ready for sending document\n- माझ्या कामाची स्थिती / status / check my work status\n- माझे काम / my works list / work list";

/// Command menu appended to operator-facing replies.
pub const ADMIN_FOOTER: &str = "\n\nCommand for admin :\n- Status <ORDER_ID> <NEW_STATUS>\n- Delete <ORDER_ID>\n- List (Showing Pending Work)\n- Complete (Showing Completed Work)\n- Get_Docs <ORDER_ID>";

/// Hint sent after informational replies.
pub const CONTACT_STAFF_HINT: &str = "कर्मचाऱ्यांशी संपर्क साधण्यासाठी Contact Staff टाइप करा. 😊";

fn bulleted(names: impl Iterator<Item = impl AsRef<str>>) -> String {
    names
        .map(|n| format!("\n- {}", n.as_ref()))
        .collect::<String>()
}

/// Renders an RFC3339 timestamp the way customers expect (dd/mm/yyyy hh:mm).
pub fn format_timestamp(ts: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(ts)
        .map(|dt| dt.format("%d/%m/%Y %I:%M %p").to_string())
        .unwrap_or_else(|_| ts.to_string())
}

pub fn greeting(service_names: impl Iterator<Item = impl AsRef<str>>) -> String {
    format!(
        "🟢 नमस्कार! मी तुमचा सेवा सहाय्यक बोट आहे.\n\nमी तुमचं स्वागत करतोय! खाली दिलेली सेवा मी सध्या देऊ शकतो:\n\n🗂️ सेवांची यादी:\n{}\n\nकृपया तुमची सेवा निवडा किंवा आपला प्रश्न विचारा.{CUSTOMER_FOOTER}",
        bulleted(service_names)
    )
}

pub fn service_list(service_names: impl Iterator<Item = impl AsRef<str>>) -> String {
    format!(
        "खालील सेवांची यादी उपलब्ध आहे:\n{}\n\nकृपया तुमची सेवा निवडा किंवा तुमचा प्रश्न विचारा.",
        bulleted(service_names)
    )
}

pub fn documents_service_prompt(service_names: impl Iterator<Item = impl AsRef<str>>) -> String {
    format!(
        "कृपया खालील सेवांपैकी एक निवडा ज्यासाठी कागदपत्रे हवी आहेत:\n{}",
        bulleted(service_names)
    )
}

pub fn documents_for_service(name: &str, documents: &str, charges: &str) -> String {
    let formatted: String = documents
        .split(',')
        .map(|doc| format!("\n- {}", doc.trim()))
        .collect();
    format!(
        "{name} साठी खालील कागदपत्रे आवश्यक आहेत:\n{formatted}\n\nसेवा शुल्क: {charges}\n\nजर तुम्हाला ही सेवा हवी असेल तर कृपया वरील कागदपत्रे पाठवा."
    )
}

pub fn charges_list<'a>(entries: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    let list: String = entries
        .map(|(name, charges)| format!("\n- {name}: {charges}"))
        .collect();
    format!("सेवा शुल्क माहिती:\n{list}\n\nकृपया तुमची सेवा निवडा किंवा तुमचा प्रश्न विचारा.")
}

pub fn document_send_prompt() -> String {
    format!(
        "धन्यवाद! कृपया तुमची संबंधित कागदपत्रे मला पाठवा. मी तुमच्या कागदपत्रांवर काम सुरू करेन आणि लवकरच संपर्क साधेन.\n\nजर काही अजून प्रश्न असतील तर विचारायला मोकळ्या मनाने विचारा.{CUSTOMER_FOOTER}"
    )
}

pub fn check_status_prompt() -> String {
    format!(
        "कृपया तुमचा ऑर्डर आयडी द्या (उदा., WO-123456-ABC) जेणेकरून मी तुमच्या कामाची स्थिती तपासू शकेन.{CUSTOMER_FOOTER}"
    )
}

// --- Attachment intake ---

pub fn unsupported_document_type() -> String {
    "असमर्थित दस्तऐवज स्वरूप. कृपया PDF, JPEG, PNG, किंवा Word दस्तऐवज पाठवा.".to_string()
}

pub fn document_too_large() -> String {
    "दस्तऐवज खूप मोठा आहे. कृपया 10 MB पेक्षा लहान फाइल पाठवा.".to_string()
}

pub fn batch_full(max: usize) -> String {
    format!(
        "कृपया एका वेळी {max} पेक्षा जास्त दस्तऐवज पाठवू नका. प्रथम विद्यमान दस्तऐवजांसाठी कारण द्या."
    )
}

pub fn document_queued() -> String {
    "⏳ कृपया थोडा वेळ थांबा, तुमचा दस्तऐवज प्रोसेस करत आहोत. धन्यवाद! 😊".to_string()
}

pub fn document_received(filename: &str) -> String {
    format!("\"{filename}\" प्राप्त झाला.")
}

pub fn reason_prompt(count: usize) -> String {
    format!(
        "आपण {count} दस्तऐवज पाठवले आहेत. कृपया सर्व दस्तऐवजांसाठी कारण आणि तुमचे नाव सांगा (उदा., \"Domocile, राम शिंदे\")."
    )
}

pub fn invalid_reason_pair() -> String {
    "कृपया वैध कारण आणि नाव सांगा (उदा., \"Domocile, राम शिंदे\").".to_string()
}

pub fn reason_window_expired() -> String {
    "कारण देण्याची वेळ संपली. तुमची कागदपत्रे जतन आहेत; तयार झाल्यावर कारण आणि नाव पाठवा (उदा., \"Domocile, राम शिंदे\").".to_string()
}

pub fn finalize_failed() -> String {
    "क्षमस्व, तुमचे काम नोंदवताना त्रुटी आली. कृपया पुन्हा प्रयत्न करा.".to_string()
}

pub fn order_confirmation(order_id: &str) -> String {
    format!(
        "धन्यवाद! तुमचे काम नोंदवले आहे. *ऑर्डर आयडी: {order_id}*. आमचे कर्मचारी लवकरच तुमच्याशी संपर्क साधतील आणि पुढील प्रक्रिया करतील.\n\nतुम्ही तुमच्या कामाची स्थिती कधीही *'माझ्या कामाची स्थिती'* ही कमांड वापरून तपासू शकता.{CUSTOMER_FOOTER}"
    )
}

pub fn operator_new_order(
    counterparty: &str,
    reason: &str,
    order_id: &str,
    filenames: &str,
) -> String {
    let user = counterparty.split('@').next().unwrap_or(counterparty);
    format!(
        "🟢 *नवीन काम नोंदवले आहे!* 🟢\n\n*वापरकर्ता:* {user}\n*सेवा:* {reason}\n*ऑर्डर आयडी:* {order_id}\n*दस्तऐवज:* {filenames}\n\nकागदपत्रे पाहण्यासाठी, कृपया हा आदेश पाठवा: *get_docs {order_id}*"
    )
}

// --- Status lookup ---

pub fn order_not_found_for_owner(order_id: &str) -> String {
    format!(
        "ऑर्डर आयडी {order_id} सापडला नाही किंवा हा तुमच्या आयडीशी जुळत नाही. कृपया योग्य ऑर्डर आयडी तपासा आणि पुन्हा प्रयत्न करा.{CUSTOMER_FOOTER}"
    )
}

pub fn order_status(order: &Order) -> String {
    let mut response = format!(
        "तुमच्या ऑर्डर {} ची स्थिती:\n\n➡️ सेवा प्रकार: {}\n   ऑर्डर आयडी: {}\n   स्थिती: {}\n   शेवटचे अपडेट: {}\n\n",
        order.order_id,
        order.service_type,
        order.order_id,
        order.status,
        format_timestamp(&order.updated_at)
    );
    if order.is_terminal() {
        response.push_str("तुमचे काम पूर्ण झाले आहे! खालील दस्तऐवज संलग्न आहेत:\n");
    } else {
        response.push_str("तुम्हाला अधिक तपशील हवा असल्यास, कृपया कर्मचाऱ्यांशी संपर्क साधा.");
    }
    response
}

pub fn no_completed_documents(order_id: &str) -> String {
    format!(
        "ऑर्डर {order_id} साठी कोणतेही पूर्ण झालेले दस्तऐवज सापडले नाहीत. कृपया कर्मचाऱ्यांशी संपर्क साधा.{CUSTOMER_FOOTER}"
    )
}

pub fn completed_document_caption(filename: &str) -> String {
    format!("पूर्ण झालेला दस्तऐवज: {filename}")
}

// --- My-works list ---

pub fn no_orders_yet() -> String {
    format!("तुम्ही सध्या कोणतीही कामे सबमिट केलेली नाहीत.{CUSTOMER_FOOTER}")
}

pub fn my_orders(pending: &[Order], completed: &[Order]) -> String {
    let mut response = "तुम्ही सबमिट केलेल्या कामांची स्थिती:\n\n".to_string();
    if !pending.is_empty() {
        response.push_str("📌 पेंडिंग कामे:\n\n");
        for order in pending {
            response.push_str(&order_list_entry(order));
        }
    }
    if !completed.is_empty() {
        response.push_str("📌 पूर्ण झालेली कामे:\n\n");
        for order in completed {
            response.push_str(&order_list_entry(order));
        }
    }
    response.push_str("तुम्हाला अधिक तपशील हवा असल्यास, कृपया कर्मचाऱ्यांशी संपर्क साधा.");
    response
}

fn order_list_entry(order: &Order) -> String {
    format!(
        "➡️ सेवा प्रकार: {}\n   ऑर्डर आयडी: {}\n   स्थिती: {}\n   शेवटचे अपडेट: {}\n\n",
        order.service_type,
        order.order_id,
        order.status,
        format_timestamp(&order.updated_at)
    )
}

// --- Staff contact ---

pub fn staff_contact_prompt() -> String {
    "कृपया कर्मचाऱ्यांशी संपर्क साधण्याचे कारण सांगा (उदा., \"पॅन कार्डच्या शुल्काबाबत माहिती हवी\").".to_string()
}

pub fn staff_contact_timeout() -> String {
    "कर्मचाऱ्यांशी संपर्क साधण्याचे कारण देण्याची वेळ संपली. कृपया पुन्हा 'कर्मचाऱ्यांशी संपर्क करायचा आहे' कमांड वापरा (Contact staff).".to_string()
}

pub fn staff_reason_ack(reason: &str) -> String {
    format!(
        "धन्यवाद! तुमचे कारण \"{reason}\" कर्मचाऱ्यांना पाठवले आहे. आम्ही लवकरच तुमच्याशी संपर्क साधू.{CUSTOMER_FOOTER}"
    )
}

pub fn staff_reason_forward(counterparty: &str, reason: &str) -> String {
    format!(
        "नवीन कर्मचारी संपर्क विनंती:\nID: {counterparty}\nकारण: {reason}\nकृपया कार्यवाही करा."
    )
}

// --- Operator lifecycle replies ---

pub fn status_usage() -> String {
    "कृपया योग्य फॉरमॅट वापरा: *status <ऑर्डर आयडी> <नवीन स्थिती>*\nउदा: status WO-123456 Payment Pending".to_string()
}

pub fn delete_usage() -> String {
    "कृपया योग्य फॉरमॅट वापरा: *delete <ऑर्डर आयडी>*\nउदा: delete WO-123456".to_string()
}

pub fn get_docs_usage() -> String {
    "कृपया ऑर्डर आयडी द्या. उदाहरणार्थ: get_docs WO-123456789-ABC".to_string()
}

pub fn list_usage() -> String {
    "कृपया योग्य फॉरमॅट वापरा: *list [ID]* किंवा *completed [ID]*".to_string()
}

pub fn order_not_found(order_id: &str) -> String {
    format!("ऑर्डर आयडी {order_id} सापडला नाही.")
}

pub fn status_updated(order_id: &str, status: &str) -> String {
    format!("ऑर्डर आयडी {order_id} ची स्थिती यशस्वीरित्या \"{status}\" मध्ये अपडेट केली.")
}

pub fn order_completed(order_id: &str) -> String {
    format!("✅ ऑर्डर {order_id} यशस्वीरित्या पूर्ण झाली आहे. सर्व दस्तऐवज हटवले.")
}

pub fn admin_document_prompt(order_id: &str) -> String {
    format!("कृपया ऑर्डर {order_id} साठी पूर्ण झालेला दस्तऐवज (PDF, JPEG, PNG, Word) पाठवा.")
}

pub fn admin_document_timeout(order_id: &str) -> String {
    format!(
        "ऑर्डर {order_id} साठी दस्तऐवज अपलोड करण्याची वेळ संपली. आवश्यक असल्यास पुन्हा स्थिती अपडेट करा."
    )
}

pub fn admin_document_saved(order_id: &str, filename: &str) -> String {
    format!("ऑर्डर {order_id} साठी दस्तऐवज {filename} यशस्वीरित्या जतन केला.")
}

pub fn completed_document_for_client(order_id: &str) -> String {
    format!("तुमच्या ऑर्डर {order_id} साठी पूर्ण झालेला दस्तऐवज:")
}

pub fn status_update_notice(order: &Order, terminal: bool) -> String {
    let document_note = if terminal {
        "पूर्ण झालेला दस्तऐवज लवकरच पाठवला जाईल. "
    } else {
        ""
    };
    format!(
        "तुमच्या कामाची स्थिती अपडेट झाली आहे:\n\n➡️ सेवा प्रकार: {}\n   ऑर्डर आयडी: {}\n   स्थिती: {}\n   शेवटचे अपडेट: {}\n\n{document_note}तुम्ही 'माझ्या कामाची स्थिती' वापरून कधीही तपासू शकता.",
        order.service_type,
        order.order_id,
        order.status,
        format_timestamp(&order.updated_at)
    )
}

pub fn order_deleted(order_id: &str) -> String {
    format!("ऑर्डर आयडी {order_id} यशस्वीरित्या हटवला.")
}

pub fn no_pending_orders() -> String {
    "कोणतीही पेंडिंग ऑर्डर सापडली नाही.".to_string()
}

pub fn no_completed_orders() -> String {
    "कोणतीही पूर्ण झालेली ऑर्डर सापडली नाही.".to_string()
}

pub fn operator_order_list(heading: &str, orders: &[Order]) -> String {
    let mut response = format!("{heading} ({}):\n\n", orders.len());
    for order in orders {
        let client = order
            .counterparty_id
            .as_str()
            .split('@')
            .next()
            .unwrap_or(order.counterparty_id.as_str());
        response.push_str(&format!(
            "*ID:* {}\n*Client:* {client}\n*Service:* {}\n*Status:* {}\n\n",
            order.order_id, order.service_type, order.status
        ));
    }
    response
}

pub fn get_docs_completed(order_id: &str) -> String {
    format!("ऑर्डर {order_id} पूर्ण झाली आहे, त्यामुळे संबंधित कागदपत्रे हटवण्यात आली आहेत.")
}

pub fn get_docs_empty(order_id: &str, reason: &str) -> String {
    format!("ऑर्डर {order_id} साठी कोणतेही कागदपत्रे उपलब्ध नाहीत.\n\nकारण: *{reason}*")
}

pub fn get_docs_header(order_id: &str, reason: &str) -> String {
    format!("ऑर्डर {order_id} साठी कारण: *{reason}*\n\nखालील कागदपत्रे पाठवत आहे:")
}

pub fn get_docs_done(order_id: &str) -> String {
    format!("ऑर्डर {order_id} साठी सर्व कागदपत्रे पाठवली.")
}

pub fn generic_error() -> String {
    format!("क्षमस्व, त्रुटी आली. कृपया पुन्हा प्रयत्न करा.{CUSTOMER_FOOTER}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_renders_in_local_display_format() {
        let rendered = format_timestamp("2026-02-01T10:30:00Z");
        assert!(rendered.contains("01/02/2026"), "got {rendered}");
    }

    #[test]
    fn unparseable_timestamp_passes_through() {
        assert_eq!(format_timestamp("soon"), "soon");
    }

    #[test]
    fn greeting_lists_every_service() {
        let names = ["सेवा एक", "सेवा दोन"];
        let text = greeting(names.iter());
        assert!(text.contains("- सेवा एक"));
        assert!(text.contains("- सेवा दोन"));
        assert!(text.ends_with(CUSTOMER_FOOTER));
    }

    #[test]
    fn documents_for_service_formats_each_document() {
        let text = documents_for_service("जातिचा दाखला", "आधार कार्ड, रेशन कार्ड", "₹150");
        assert!(text.contains("- आधार कार्ड"));
        assert!(text.contains("- रेशन कार्ड"));
        assert!(text.contains("₹150"));
    }

    #[test]
    fn operator_summary_strips_channel_suffix() {
        let text = operator_new_order("919812345678@c.us", "pan", "WO-1-AAAAAA", "a.pdf");
        assert!(text.contains("*वापरकर्ता:* 919812345678\n"));
        assert!(text.contains("get_docs WO-1-AAAAAA"));
    }
}
