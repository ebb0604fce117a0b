use crate::db::Record;
use crate::db::models::{Client, ClientPatch, Lead, LeadPatch, NewClient, NewLead};
use crate::db::wire::{ClientRow, ClientWrite, LeadRow, LeadWrite};

pub fn client_to_app(row: ClientRow) -> Client {
    Client {
        id: row.id,
        name: row.name,
        email: row.email,
        phone: row.phone,
        whatsapp: row.whatsapp,
        since: row.since,
        instagram: row.instagram,
        status: row.status,
        client_type: row.client_type,
        last_contact: row.last_contact,
        portal_access_id: row.portal_access_id,
    }
}

pub fn client_to_wire(new: &NewClient) -> ClientWrite {
    ClientWrite {
        name: Some(new.name.clone()),
        email: Some(new.email.clone()),
        phone: Some(new.phone.clone()),
        whatsapp: new.whatsapp.clone().map(Some),
        since: Some(new.since.clone()),
        instagram: new.instagram.clone().map(Some),
        status: Some(new.status.clone()),
        client_type: Some(new.client_type.clone()),
        last_contact: Some(new.last_contact.clone()),
        portal_access_id: Some(new.portal_access_id.clone()),
    }
}

pub fn client_patch_to_wire(patch: &ClientPatch) -> ClientWrite {
    ClientWrite {
        name: patch.name.clone(),
        email: patch.email.clone(),
        phone: patch.phone.clone(),
        whatsapp: patch.whatsapp.clone(),
        since: patch.since.clone(),
        instagram: patch.instagram.clone(),
        status: patch.status.clone(),
        client_type: patch.client_type.clone(),
        last_contact: patch.last_contact.clone(),
        portal_access_id: patch.portal_access_id.clone(),
    }
}

impl Record for Client {
    const TABLE: &'static str = "clients";
    const NAME: &'static str = "client";

    type Row = ClientRow;
    type New = NewClient;
    type Patch = ClientPatch;
    type Write = ClientWrite;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_app(row: ClientRow) -> Self {
        client_to_app(row)
    }

    fn to_wire(new: &NewClient) -> ClientWrite {
        client_to_wire(new)
    }

    fn patch_to_wire(patch: &ClientPatch) -> ClientWrite {
        client_patch_to_wire(patch)
    }
}

pub fn lead_to_app(row: LeadRow) -> Lead {
    Lead {
        id: row.id,
        name: row.name,
        contact_channel: row.contact_channel,
        location: row.location,
        status: row.status,
        date: row.date,
        notes: row.notes,
        whatsapp: row.whatsapp,
    }
}

pub fn lead_to_wire(new: &NewLead) -> LeadWrite {
    LeadWrite {
        name: Some(new.name.clone()),
        contact_channel: Some(new.contact_channel.clone()),
        location: Some(new.location.clone()),
        status: Some(new.status.clone()),
        date: Some(new.date.clone()),
        notes: new.notes.clone().map(Some),
        whatsapp: new.whatsapp.clone().map(Some),
    }
}

pub fn lead_patch_to_wire(patch: &LeadPatch) -> LeadWrite {
    LeadWrite {
        name: patch.name.clone(),
        contact_channel: patch.contact_channel.clone(),
        location: patch.location.clone(),
        status: patch.status.clone(),
        date: patch.date.clone(),
        notes: patch.notes.clone(),
        whatsapp: patch.whatsapp.clone(),
    }
}

impl Record for Lead {
    const TABLE: &'static str = "leads";
    const NAME: &'static str = "lead";

    type Row = LeadRow;
    type New = NewLead;
    type Patch = LeadPatch;
    type Write = LeadWrite;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_app(row: LeadRow) -> Self {
        lead_to_app(row)
    }

    fn to_wire(new: &NewLead) -> LeadWrite {
        lead_to_wire(new)
    }

    fn patch_to_wire(patch: &LeadPatch) -> LeadWrite {
        lead_patch_to_wire(patch)
    }
}
