use crate::db::Record;
use crate::db::models::{Contract, ContractPatch, NewContract};
use crate::db::wire::{ContractRow, ContractWrite};

pub fn contract_to_app(row: ContractRow) -> Contract {
    Contract {
        id: row.id,
        contract_number: row.contract_number,
        client_id: row.client_id,
        project_id: row.project_id,
        signing_date: row.signing_date,
        signing_location: row.signing_location,
        client_name1: row.client_name1,
        client_address1: row.client_address1,
        client_phone1: row.client_phone1,
        client_name2: row.client_name2,
        client_address2: row.client_address2,
        client_phone2: row.client_phone2,
        shooting_duration: row.shooting_duration,
        guaranteed_photos: row.guaranteed_photos,
        album_details: row.album_details,
        digital_files_format: row.digital_files_format,
        other_items: row.other_items,
        personnel_count: row.personnel_count,
        delivery_timeframe: row.delivery_timeframe,
        dp_date: row.dp_date,
        final_payment_date: row.final_payment_date,
        cancellation_policy: row.cancellation_policy,
        jurisdiction: row.jurisdiction,
        vendor_signature: row.vendor_signature,
        client_signature: row.client_signature,
    }
}

pub fn contract_to_wire(new: &NewContract) -> ContractWrite {
    ContractWrite {
        contract_number: Some(new.contract_number.clone()),
        client_id: Some(new.client_id.clone()),
        project_id: Some(new.project_id.clone()),
        signing_date: Some(new.signing_date.clone()),
        signing_location: Some(new.signing_location.clone()),
        client_name1: Some(new.client_name1.clone()),
        client_address1: Some(new.client_address1.clone()),
        client_phone1: Some(new.client_phone1.clone()),
        client_name2: new.client_name2.clone().map(Some),
        client_address2: new.client_address2.clone().map(Some),
        client_phone2: new.client_phone2.clone().map(Some),
        shooting_duration: Some(new.shooting_duration.clone()),
        guaranteed_photos: Some(new.guaranteed_photos.clone()),
        album_details: Some(new.album_details.clone()),
        digital_files_format: Some(new.digital_files_format.clone()),
        other_items: Some(new.other_items.clone()),
        personnel_count: Some(new.personnel_count.clone()),
        delivery_timeframe: Some(new.delivery_timeframe.clone()),
        dp_date: Some(new.dp_date.clone()),
        final_payment_date: Some(new.final_payment_date.clone()),
        cancellation_policy: Some(new.cancellation_policy.clone()),
        jurisdiction: Some(new.jurisdiction.clone()),
        vendor_signature: new.vendor_signature.clone().map(Some),
        client_signature: new.client_signature.clone().map(Some),
    }
}

pub fn contract_patch_to_wire(patch: &ContractPatch) -> ContractWrite {
    ContractWrite {
        contract_number: patch.contract_number.clone(),
        client_id: patch.client_id.clone(),
        project_id: patch.project_id.clone(),
        signing_date: patch.signing_date.clone(),
        signing_location: patch.signing_location.clone(),
        client_name1: patch.client_name1.clone(),
        client_address1: patch.client_address1.clone(),
        client_phone1: patch.client_phone1.clone(),
        client_name2: patch.client_name2.clone(),
        client_address2: patch.client_address2.clone(),
        client_phone2: patch.client_phone2.clone(),
        shooting_duration: patch.shooting_duration.clone(),
        guaranteed_photos: patch.guaranteed_photos.clone(),
        album_details: patch.album_details.clone(),
        digital_files_format: patch.digital_files_format.clone(),
        other_items: patch.other_items.clone(),
        personnel_count: patch.personnel_count.clone(),
        delivery_timeframe: patch.delivery_timeframe.clone(),
        dp_date: patch.dp_date.clone(),
        final_payment_date: patch.final_payment_date.clone(),
        cancellation_policy: patch.cancellation_policy.clone(),
        jurisdiction: patch.jurisdiction.clone(),
        vendor_signature: patch.vendor_signature.clone(),
        client_signature: patch.client_signature.clone(),
    }
}

impl Record for Contract {
    const TABLE: &'static str = "contracts";
    const NAME: &'static str = "contract";

    type Row = ContractRow;
    type New = NewContract;
    type Patch = ContractPatch;
    type Write = ContractWrite;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_app(row: ContractRow) -> Self {
        contract_to_app(row)
    }

    fn to_wire(new: &NewContract) -> ContractWrite {
        contract_to_wire(new)
    }

    fn patch_to_wire(patch: &ContractPatch) -> ContractWrite {
        contract_patch_to_wire(patch)
    }
}
