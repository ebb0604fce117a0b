use crate::db::Record;
use crate::db::models::{
    Asset, AssetPatch, NewAsset, NewNotification, NewPromoCode, NewSop, Notification,
    NotificationPatch, PromoCode, PromoCodePatch, Sop, SopPatch,
};
use crate::db::wire::{
    AssetRow, AssetWrite, NotificationRow, NotificationWrite, PromoCodeRow, PromoCodeWrite,
    SopRow, SopWrite,
};

pub fn asset_to_app(row: AssetRow) -> Asset {
    Asset {
        id: row.id,
        name: row.name,
        category: row.category,
        purchase_date: row.purchase_date,
        purchase_price: row.purchase_price,
        serial_number: row.serial_number,
        status: row.status,
        notes: row.notes,
    }
}

pub fn asset_to_wire(new: &NewAsset) -> AssetWrite {
    AssetWrite {
        name: Some(new.name.clone()),
        category: Some(new.category.clone()),
        purchase_date: Some(new.purchase_date.clone()),
        purchase_price: Some(new.purchase_price),
        serial_number: new.serial_number.clone().map(Some),
        status: Some(new.status.clone()),
        notes: new.notes.clone().map(Some),
    }
}

pub fn asset_patch_to_wire(patch: &AssetPatch) -> AssetWrite {
    AssetWrite {
        name: patch.name.clone(),
        category: patch.category.clone(),
        purchase_date: patch.purchase_date.clone(),
        purchase_price: patch.purchase_price,
        serial_number: patch.serial_number.clone(),
        status: patch.status.clone(),
        notes: patch.notes.clone(),
    }
}

impl Record for Asset {
    const TABLE: &'static str = "assets";
    const NAME: &'static str = "asset";

    type Row = AssetRow;
    type New = NewAsset;
    type Patch = AssetPatch;
    type Write = AssetWrite;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_app(row: AssetRow) -> Self {
        asset_to_app(row)
    }

    fn to_wire(new: &NewAsset) -> AssetWrite {
        asset_to_wire(new)
    }

    fn patch_to_wire(patch: &AssetPatch) -> AssetWrite {
        asset_patch_to_wire(patch)
    }
}

pub fn promo_code_to_app(row: PromoCodeRow) -> PromoCode {
    PromoCode {
        id: row.id,
        code: row.code,
        discount_type: row.discount_type,
        discount_value: row.discount_value,
        is_active: row.is_active,
        usage_count: row.usage_count,
        max_usage: row.max_usage,
        expiry_date: row.expiry_date,
    }
}

pub fn promo_code_to_wire(new: &NewPromoCode) -> PromoCodeWrite {
    PromoCodeWrite {
        code: Some(new.code.clone()),
        discount_type: Some(new.discount_type.clone()),
        discount_value: Some(new.discount_value),
        is_active: Some(new.is_active),
        usage_count: Some(new.usage_count),
        max_usage: new.max_usage.map(Some),
        expiry_date: new.expiry_date.clone().map(Some),
    }
}

pub fn promo_code_patch_to_wire(patch: &PromoCodePatch) -> PromoCodeWrite {
    PromoCodeWrite {
        code: patch.code.clone(),
        discount_type: patch.discount_type.clone(),
        discount_value: patch.discount_value,
        is_active: patch.is_active,
        usage_count: patch.usage_count,
        max_usage: patch.max_usage,
        expiry_date: patch.expiry_date.clone(),
    }
}

impl Record for PromoCode {
    const TABLE: &'static str = "promo_codes";
    const NAME: &'static str = "promo code";

    type Row = PromoCodeRow;
    type New = NewPromoCode;
    type Patch = PromoCodePatch;
    type Write = PromoCodeWrite;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_app(row: PromoCodeRow) -> Self {
        promo_code_to_app(row)
    }

    fn to_wire(new: &NewPromoCode) -> PromoCodeWrite {
        promo_code_to_wire(new)
    }

    fn patch_to_wire(patch: &PromoCodePatch) -> PromoCodeWrite {
        promo_code_patch_to_wire(patch)
    }
}

pub fn sop_to_app(row: SopRow) -> Sop {
    Sop {
        id: row.id,
        title: row.title,
        category: row.category,
        content: row.content,
        last_updated: row.last_updated,
    }
}

pub fn sop_to_wire(new: &NewSop) -> SopWrite {
    SopWrite {
        title: Some(new.title.clone()),
        category: Some(new.category.clone()),
        content: Some(new.content.clone()),
        last_updated: Some(new.last_updated.clone()),
    }
}

pub fn sop_patch_to_wire(patch: &SopPatch) -> SopWrite {
    SopWrite {
        title: patch.title.clone(),
        category: patch.category.clone(),
        content: patch.content.clone(),
        last_updated: patch.last_updated.clone(),
    }
}

impl Record for Sop {
    const TABLE: &'static str = "sops";
    const NAME: &'static str = "SOP";

    type Row = SopRow;
    type New = NewSop;
    type Patch = SopPatch;
    type Write = SopWrite;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_app(row: SopRow) -> Self {
        sop_to_app(row)
    }

    fn to_wire(new: &NewSop) -> SopWrite {
        sop_to_wire(new)
    }

    fn patch_to_wire(patch: &SopPatch) -> SopWrite {
        sop_patch_to_wire(patch)
    }
}

pub fn notification_to_app(row: NotificationRow) -> Notification {
    Notification {
        id: row.id,
        title: row.title,
        message: row.message,
        timestamp: row.timestamp,
        is_read: row.is_read,
        icon: row.icon,
        link: row.link,
    }
}

pub fn notification_to_wire(new: &NewNotification) -> NotificationWrite {
    NotificationWrite {
        title: Some(new.title.clone()),
        message: Some(new.message.clone()),
        timestamp: Some(new.timestamp.clone()),
        is_read: Some(new.is_read),
        icon: Some(new.icon.clone()),
        link: new.link.clone().map(Some),
    }
}

pub fn notification_patch_to_wire(patch: &NotificationPatch) -> NotificationWrite {
    NotificationWrite {
        title: patch.title.clone(),
        message: patch.message.clone(),
        timestamp: patch.timestamp.clone(),
        is_read: patch.is_read,
        icon: patch.icon.clone(),
        link: patch.link.clone(),
    }
}

impl Record for Notification {
    const TABLE: &'static str = "notifications";
    const NAME: &'static str = "notification";

    type Row = NotificationRow;
    type New = NewNotification;
    type Patch = NotificationPatch;
    type Write = NotificationWrite;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_app(row: NotificationRow) -> Self {
        notification_to_app(row)
    }

    fn to_wire(new: &NewNotification) -> NotificationWrite {
        notification_to_wire(new)
    }

    fn patch_to_wire(patch: &NotificationPatch) -> NotificationWrite {
        notification_patch_to_wire(patch)
    }
}
