use crate::db::Record;
use crate::db::models::{
    NewRewardLedgerEntry, NewTeamPaymentRecord, NewTeamProjectPayment, RewardLedgerEntry,
    RewardLedgerEntryPatch, TeamPaymentRecord, TeamPaymentRecordPatch, TeamProjectPayment,
    TeamProjectPaymentPatch,
};
use crate::db::wire::{
    RewardLedgerEntryRow, RewardLedgerEntryWrite, TeamPaymentRecordRow, TeamPaymentRecordWrite,
    TeamProjectPaymentRow, TeamProjectPaymentWrite,
};

pub fn team_project_payment_to_app(row: TeamProjectPaymentRow) -> TeamProjectPayment {
    TeamProjectPayment {
        id: row.id,
        project_id: row.project_id,
        team_member_name: row.team_member_name,
        team_member_id: row.team_member_id,
        date: row.date,
        status: row.status,
        fee: row.fee,
        reward: row.reward,
    }
}

pub fn team_project_payment_to_wire(new: &NewTeamProjectPayment) -> TeamProjectPaymentWrite {
    TeamProjectPaymentWrite {
        project_id: Some(new.project_id.clone()),
        team_member_name: Some(new.team_member_name.clone()),
        team_member_id: Some(new.team_member_id.clone()),
        date: Some(new.date.clone()),
        status: Some(new.status.clone()),
        fee: Some(new.fee),
        reward: new.reward.map(Some),
    }
}

pub fn team_project_payment_patch_to_wire(
    patch: &TeamProjectPaymentPatch,
) -> TeamProjectPaymentWrite {
    TeamProjectPaymentWrite {
        project_id: patch.project_id.clone(),
        team_member_name: patch.team_member_name.clone(),
        team_member_id: patch.team_member_id.clone(),
        date: patch.date.clone(),
        status: patch.status.clone(),
        fee: patch.fee,
        reward: patch.reward,
    }
}

impl Record for TeamProjectPayment {
    const TABLE: &'static str = "team_project_payments";
    const NAME: &'static str = "team project payment";

    type Row = TeamProjectPaymentRow;
    type New = NewTeamProjectPayment;
    type Patch = TeamProjectPaymentPatch;
    type Write = TeamProjectPaymentWrite;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_app(row: TeamProjectPaymentRow) -> Self {
        team_project_payment_to_app(row)
    }

    fn to_wire(new: &NewTeamProjectPayment) -> TeamProjectPaymentWrite {
        team_project_payment_to_wire(new)
    }

    fn patch_to_wire(patch: &TeamProjectPaymentPatch) -> TeamProjectPaymentWrite {
        team_project_payment_patch_to_wire(patch)
    }
}

pub fn team_payment_record_to_app(row: TeamPaymentRecordRow) -> TeamPaymentRecord {
    TeamPaymentRecord {
        id: row.id,
        record_number: row.record_number,
        team_member_id: row.team_member_id,
        date: row.date,
        project_payment_ids: row.project_payment_ids,
        total_amount: row.total_amount,
        vendor_signature: row.vendor_signature,
    }
}

pub fn team_payment_record_to_wire(new: &NewTeamPaymentRecord) -> TeamPaymentRecordWrite {
    TeamPaymentRecordWrite {
        record_number: Some(new.record_number.clone()),
        team_member_id: Some(new.team_member_id.clone()),
        date: Some(new.date.clone()),
        project_payment_ids: Some(new.project_payment_ids.clone()),
        total_amount: Some(new.total_amount),
        vendor_signature: new.vendor_signature.clone().map(Some),
    }
}

pub fn team_payment_record_patch_to_wire(patch: &TeamPaymentRecordPatch) -> TeamPaymentRecordWrite {
    TeamPaymentRecordWrite {
        record_number: patch.record_number.clone(),
        team_member_id: patch.team_member_id.clone(),
        date: patch.date.clone(),
        project_payment_ids: patch.project_payment_ids.clone(),
        total_amount: patch.total_amount,
        vendor_signature: patch.vendor_signature.clone(),
    }
}

impl Record for TeamPaymentRecord {
    const TABLE: &'static str = "team_payment_records";
    const NAME: &'static str = "team payment record";

    type Row = TeamPaymentRecordRow;
    type New = NewTeamPaymentRecord;
    type Patch = TeamPaymentRecordPatch;
    type Write = TeamPaymentRecordWrite;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_app(row: TeamPaymentRecordRow) -> Self {
        team_payment_record_to_app(row)
    }

    fn to_wire(new: &NewTeamPaymentRecord) -> TeamPaymentRecordWrite {
        team_payment_record_to_wire(new)
    }

    fn patch_to_wire(patch: &TeamPaymentRecordPatch) -> TeamPaymentRecordWrite {
        team_payment_record_patch_to_wire(patch)
    }
}

pub fn reward_ledger_entry_to_app(row: RewardLedgerEntryRow) -> RewardLedgerEntry {
    RewardLedgerEntry {
        id: row.id,
        team_member_id: row.team_member_id,
        date: row.date,
        description: row.description,
        amount: row.amount,
        project_id: row.project_id,
    }
}

pub fn reward_ledger_entry_to_wire(new: &NewRewardLedgerEntry) -> RewardLedgerEntryWrite {
    RewardLedgerEntryWrite {
        team_member_id: Some(new.team_member_id.clone()),
        date: Some(new.date.clone()),
        description: Some(new.description.clone()),
        amount: Some(new.amount),
        project_id: new.project_id.clone().map(Some),
    }
}

pub fn reward_ledger_entry_patch_to_wire(patch: &RewardLedgerEntryPatch) -> RewardLedgerEntryWrite {
    RewardLedgerEntryWrite {
        team_member_id: patch.team_member_id.clone(),
        date: patch.date.clone(),
        description: patch.description.clone(),
        amount: patch.amount,
        project_id: patch.project_id.clone(),
    }
}

impl Record for RewardLedgerEntry {
    const TABLE: &'static str = "reward_ledger_entries";
    const NAME: &'static str = "reward ledger entry";

    type Row = RewardLedgerEntryRow;
    type New = NewRewardLedgerEntry;
    type Patch = RewardLedgerEntryPatch;
    type Write = RewardLedgerEntryWrite;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_app(row: RewardLedgerEntryRow) -> Self {
        reward_ledger_entry_to_app(row)
    }

    fn to_wire(new: &NewRewardLedgerEntry) -> RewardLedgerEntryWrite {
        reward_ledger_entry_to_wire(new)
    }

    fn patch_to_wire(patch: &RewardLedgerEntryPatch) -> RewardLedgerEntryWrite {
        reward_ledger_entry_patch_to_wire(patch)
    }
}
