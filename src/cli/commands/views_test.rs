use crate::cli::commands::views::Listing;
use crate::db::models::*;

#[test]
fn project_view_formats_progress_and_money() {
    let project = Project {
        id: "pr-1".to_string(),
        project_name: "Wedding Rina & Dimas".to_string(),
        client_name: "Rina".to_string(),
        client_id: "cl-1".to_string(),
        project_type: "Pernikahan".to_string(),
        package_name: "Gold".to_string(),
        package_id: "pkg-1".to_string(),
        add_ons: Vec::new(),
        date: "2024-08-17".to_string(),
        deadline_date: None,
        location: "Yogyakarta".to_string(),
        progress: 40,
        status: "Editing".to_string(),
        active_sub_statuses: None,
        total_cost: 15000000.0,
        amount_paid: 5000000.0,
        payment_status: PaymentStatus::DownPaymentPaid,
        team: Vec::new(),
        notes: None,
        accommodation: None,
        drive_link: None,
        client_drive_link: None,
        final_drive_link: None,
        start_time: None,
        end_time: None,
        image: None,
        revisions: None,
        promo_code_id: None,
        discount_amount: None,
        shipping_details: None,
        dp_proof_url: None,
        printing_details: None,
        printing_cost: None,
        transport_cost: None,
        is_editing_confirmed_by_client: None,
        is_printing_confirmed_by_client: None,
        is_delivery_confirmed_by_client: None,
        confirmed_sub_statuses: None,
        client_sub_status_notes: None,
        sub_status_confirmation_sent_at: None,
        completed_digital_items: None,
        invoice_signature: None,
        custom_sub_statuses: None,
        booking_status: None,
        rejection_reason: None,
        chat_history: None,
    };

    let view = project.view();

    assert_eq!(view.progress, "40%");
    assert_eq!(view.total_cost, "15,000,000");
    assert_eq!(view.payment_status, "DP Terbayar");
}

#[test]
fn promo_code_view_shows_percentage_and_usage() {
    let promo = PromoCode {
        id: "promo-1".to_string(),
        code: "HEMAT10".to_string(),
        discount_type: DiscountType::Percentage,
        discount_value: 10.0,
        is_active: true,
        usage_count: 3,
        max_usage: Some(50),
        expiry_date: None,
    };

    let view = promo.view();

    assert_eq!(view.discount, "10%");
    assert_eq!(view.usage, "3/50");
    assert_eq!(view.is_active, "yes");
}

#[test]
fn pocket_view_without_goal_shows_dash() {
    let pocket = FinancialPocket {
        id: "pk-1".to_string(),
        name: "Dana Darurat".to_string(),
        description: String::new(),
        icon: PocketIcon::Lock,
        kind: PocketType::Locked,
        amount: 2500000.0,
        goal_amount: None,
        lock_end_date: None,
        members: None,
        source_card_id: None,
    };

    let view = pocket.view();

    assert_eq!(view.goal_amount, "-");
    assert_eq!(view.kind, "Terkunci");
}
