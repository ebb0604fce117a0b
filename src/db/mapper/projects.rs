use crate::db::Record;
use crate::db::models::{NewProject, Project, ProjectPatch};
use crate::db::wire::{ProjectRow, ProjectWrite};

pub fn project_to_app(row: ProjectRow) -> Project {
    Project {
        id: row.id,
        project_name: row.project_name,
        client_name: row.client_name,
        client_id: row.client_id,
        project_type: row.project_type,
        package_name: row.package_name,
        package_id: row.package_id,
        add_ons: row.add_ons,
        date: row.date,
        deadline_date: row.deadline_date,
        location: row.location,
        progress: row.progress,
        status: row.status,
        active_sub_statuses: row.active_sub_statuses,
        total_cost: row.total_cost,
        amount_paid: row.amount_paid,
        payment_status: row.payment_status,
        team: row.team,
        notes: row.notes,
        accommodation: row.accommodation,
        drive_link: row.drive_link,
        client_drive_link: row.client_drive_link,
        final_drive_link: row.final_drive_link,
        start_time: row.start_time,
        end_time: row.end_time,
        image: row.image,
        revisions: row.revisions,
        promo_code_id: row.promo_code_id,
        discount_amount: row.discount_amount,
        shipping_details: row.shipping_details,
        dp_proof_url: row.dp_proof_url,
        printing_details: row.printing_details,
        printing_cost: row.printing_cost,
        transport_cost: row.transport_cost,
        is_editing_confirmed_by_client: row.is_editing_confirmed_by_client,
        is_printing_confirmed_by_client: row.is_printing_confirmed_by_client,
        is_delivery_confirmed_by_client: row.is_delivery_confirmed_by_client,
        confirmed_sub_statuses: row.confirmed_sub_statuses,
        client_sub_status_notes: row.client_sub_status_notes,
        sub_status_confirmation_sent_at: row.sub_status_confirmation_sent_at,
        completed_digital_items: row.completed_digital_items,
        invoice_signature: row.invoice_signature,
        custom_sub_statuses: row.custom_sub_statuses,
        booking_status: row.booking_status,
        rejection_reason: row.rejection_reason,
        chat_history: row.chat_history,
    }
}

pub fn project_to_wire(new: &NewProject) -> ProjectWrite {
    ProjectWrite {
        project_name: Some(new.project_name.clone()),
        client_name: Some(new.client_name.clone()),
        client_id: Some(new.client_id.clone()),
        project_type: Some(new.project_type.clone()),
        package_name: Some(new.package_name.clone()),
        package_id: Some(new.package_id.clone()),
        add_ons: Some(new.add_ons.clone()),
        date: Some(new.date.clone()),
        deadline_date: new.deadline_date.clone().map(Some),
        location: Some(new.location.clone()),
        progress: Some(new.progress),
        status: Some(new.status.clone()),
        active_sub_statuses: new.active_sub_statuses.clone().map(Some),
        total_cost: Some(new.total_cost),
        amount_paid: Some(new.amount_paid),
        payment_status: Some(new.payment_status.clone()),
        team: Some(new.team.clone()),
        notes: new.notes.clone().map(Some),
        accommodation: new.accommodation.clone().map(Some),
        drive_link: new.drive_link.clone().map(Some),
        client_drive_link: new.client_drive_link.clone().map(Some),
        final_drive_link: new.final_drive_link.clone().map(Some),
        start_time: new.start_time.clone().map(Some),
        end_time: new.end_time.clone().map(Some),
        image: new.image.clone().map(Some),
        revisions: new.revisions.clone().map(Some),
        promo_code_id: new.promo_code_id.clone().map(Some),
        discount_amount: new.discount_amount.map(Some),
        shipping_details: new.shipping_details.clone().map(Some),
        dp_proof_url: new.dp_proof_url.clone().map(Some),
        printing_details: new.printing_details.clone().map(Some),
        printing_cost: new.printing_cost.map(Some),
        transport_cost: new.transport_cost.map(Some),
        is_editing_confirmed_by_client: new.is_editing_confirmed_by_client.map(Some),
        is_printing_confirmed_by_client: new.is_printing_confirmed_by_client.map(Some),
        is_delivery_confirmed_by_client: new.is_delivery_confirmed_by_client.map(Some),
        confirmed_sub_statuses: new.confirmed_sub_statuses.clone().map(Some),
        client_sub_status_notes: new.client_sub_status_notes.clone().map(Some),
        sub_status_confirmation_sent_at: new.sub_status_confirmation_sent_at.clone().map(Some),
        completed_digital_items: new.completed_digital_items.clone().map(Some),
        invoice_signature: new.invoice_signature.clone().map(Some),
        custom_sub_statuses: new.custom_sub_statuses.clone().map(Some),
        booking_status: new.booking_status.clone().map(Some),
        rejection_reason: new.rejection_reason.clone().map(Some),
        chat_history: new.chat_history.clone().map(Some),
    }
}

pub fn project_patch_to_wire(patch: &ProjectPatch) -> ProjectWrite {
    ProjectWrite {
        project_name: patch.project_name.clone(),
        client_name: patch.client_name.clone(),
        client_id: patch.client_id.clone(),
        project_type: patch.project_type.clone(),
        package_name: patch.package_name.clone(),
        package_id: patch.package_id.clone(),
        add_ons: patch.add_ons.clone(),
        date: patch.date.clone(),
        deadline_date: patch.deadline_date.clone(),
        location: patch.location.clone(),
        progress: patch.progress,
        status: patch.status.clone(),
        active_sub_statuses: patch.active_sub_statuses.clone(),
        total_cost: patch.total_cost,
        amount_paid: patch.amount_paid,
        payment_status: patch.payment_status.clone(),
        team: patch.team.clone(),
        notes: patch.notes.clone(),
        accommodation: patch.accommodation.clone(),
        drive_link: patch.drive_link.clone(),
        client_drive_link: patch.client_drive_link.clone(),
        final_drive_link: patch.final_drive_link.clone(),
        start_time: patch.start_time.clone(),
        end_time: patch.end_time.clone(),
        image: patch.image.clone(),
        revisions: patch.revisions.clone(),
        promo_code_id: patch.promo_code_id.clone(),
        discount_amount: patch.discount_amount,
        shipping_details: patch.shipping_details.clone(),
        dp_proof_url: patch.dp_proof_url.clone(),
        printing_details: patch.printing_details.clone(),
        printing_cost: patch.printing_cost,
        transport_cost: patch.transport_cost,
        is_editing_confirmed_by_client: patch.is_editing_confirmed_by_client,
        is_printing_confirmed_by_client: patch.is_printing_confirmed_by_client,
        is_delivery_confirmed_by_client: patch.is_delivery_confirmed_by_client,
        confirmed_sub_statuses: patch.confirmed_sub_statuses.clone(),
        client_sub_status_notes: patch.client_sub_status_notes.clone(),
        sub_status_confirmation_sent_at: patch.sub_status_confirmation_sent_at.clone(),
        completed_digital_items: patch.completed_digital_items.clone(),
        invoice_signature: patch.invoice_signature.clone(),
        custom_sub_statuses: patch.custom_sub_statuses.clone(),
        booking_status: patch.booking_status.clone(),
        rejection_reason: patch.rejection_reason.clone(),
        chat_history: patch.chat_history.clone(),
    }
}

impl Record for Project {
    const TABLE: &'static str = "projects";
    const NAME: &'static str = "project";

    type Row = ProjectRow;
    type New = NewProject;
    type Patch = ProjectPatch;
    type Write = ProjectWrite;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_app(row: ProjectRow) -> Self {
        project_to_app(row)
    }

    fn to_wire(new: &NewProject) -> ProjectWrite {
        project_to_wire(new)
    }

    fn patch_to_wire(patch: &ProjectPatch) -> ProjectWrite {
        project_patch_to_wire(patch)
    }
}
