use crate::db::Record;
use crate::db::models::{
    Card, CardPatch, FinancialPocket, FinancialPocketPatch, NewCard, NewFinancialPocket,
    NewTransaction, Transaction, TransactionPatch,
};
use crate::db::wire::{
    CardRow, CardWrite, FinancialPocketRow, FinancialPocketWrite, TransactionRow,
    TransactionWrite,
};

pub fn transaction_to_app(row: TransactionRow) -> Transaction {
    Transaction {
        id: row.id,
        date: row.date,
        description: row.description,
        amount: row.amount,
        kind: row.kind,
        project_id: row.project_id,
        category: row.category,
        method: row.method,
        pocket_id: row.pocket_id,
        card_id: row.card_id,
        printing_item_id: row.printing_item_id,
        vendor_signature: row.vendor_signature,
    }
}

pub fn transaction_to_wire(new: &NewTransaction) -> TransactionWrite {
    TransactionWrite {
        date: Some(new.date.clone()),
        description: Some(new.description.clone()),
        amount: Some(new.amount),
        kind: Some(new.kind.clone()),
        project_id: new.project_id.clone().map(Some),
        category: Some(new.category.clone()),
        method: Some(new.method.clone()),
        pocket_id: new.pocket_id.clone().map(Some),
        card_id: new.card_id.clone().map(Some),
        printing_item_id: new.printing_item_id.clone().map(Some),
        vendor_signature: new.vendor_signature.clone().map(Some),
    }
}

pub fn transaction_patch_to_wire(patch: &TransactionPatch) -> TransactionWrite {
    TransactionWrite {
        date: patch.date.clone(),
        description: patch.description.clone(),
        amount: patch.amount,
        kind: patch.kind.clone(),
        project_id: patch.project_id.clone(),
        category: patch.category.clone(),
        method: patch.method.clone(),
        pocket_id: patch.pocket_id.clone(),
        card_id: patch.card_id.clone(),
        printing_item_id: patch.printing_item_id.clone(),
        vendor_signature: patch.vendor_signature.clone(),
    }
}

impl Record for Transaction {
    const TABLE: &'static str = "transactions";
    const NAME: &'static str = "transaction";

    type Row = TransactionRow;
    type New = NewTransaction;
    type Patch = TransactionPatch;
    type Write = TransactionWrite;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_app(row: TransactionRow) -> Self {
        transaction_to_app(row)
    }

    fn to_wire(new: &NewTransaction) -> TransactionWrite {
        transaction_to_wire(new)
    }

    fn patch_to_wire(patch: &TransactionPatch) -> TransactionWrite {
        transaction_patch_to_wire(patch)
    }
}

pub fn financial_pocket_to_app(row: FinancialPocketRow) -> FinancialPocket {
    FinancialPocket {
        id: row.id,
        name: row.name,
        description: row.description,
        icon: row.icon,
        kind: row.kind,
        amount: row.amount,
        goal_amount: row.goal_amount,
        lock_end_date: row.lock_end_date,
        members: row.members,
        source_card_id: row.source_card_id,
    }
}

pub fn financial_pocket_to_wire(new: &NewFinancialPocket) -> FinancialPocketWrite {
    FinancialPocketWrite {
        name: Some(new.name.clone()),
        description: Some(new.description.clone()),
        icon: Some(new.icon.clone()),
        kind: Some(new.kind.clone()),
        amount: Some(new.amount),
        goal_amount: new.goal_amount.map(Some),
        lock_end_date: new.lock_end_date.clone().map(Some),
        members: new.members.clone().map(Some),
        source_card_id: new.source_card_id.clone().map(Some),
    }
}

pub fn financial_pocket_patch_to_wire(patch: &FinancialPocketPatch) -> FinancialPocketWrite {
    FinancialPocketWrite {
        name: patch.name.clone(),
        description: patch.description.clone(),
        icon: patch.icon.clone(),
        kind: patch.kind.clone(),
        amount: patch.amount,
        goal_amount: patch.goal_amount,
        lock_end_date: patch.lock_end_date.clone(),
        members: patch.members.clone(),
        source_card_id: patch.source_card_id.clone(),
    }
}

impl Record for FinancialPocket {
    const TABLE: &'static str = "financial_pockets";
    const NAME: &'static str = "financial pocket";

    type Row = FinancialPocketRow;
    type New = NewFinancialPocket;
    type Patch = FinancialPocketPatch;
    type Write = FinancialPocketWrite;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_app(row: FinancialPocketRow) -> Self {
        financial_pocket_to_app(row)
    }

    fn to_wire(new: &NewFinancialPocket) -> FinancialPocketWrite {
        financial_pocket_to_wire(new)
    }

    fn patch_to_wire(patch: &FinancialPocketPatch) -> FinancialPocketWrite {
        financial_pocket_patch_to_wire(patch)
    }
}

pub fn card_to_app(row: CardRow) -> Card {
    Card {
        id: row.id,
        card_holder_name: row.card_holder_name,
        bank_name: row.bank_name,
        card_type: row.card_type,
        last_four_digits: row.last_four_digits,
        expiry_date: row.expiry_date,
        balance: row.balance,
        color_gradient: row.color_gradient,
    }
}

pub fn card_to_wire(new: &NewCard) -> CardWrite {
    CardWrite {
        card_holder_name: Some(new.card_holder_name.clone()),
        bank_name: Some(new.bank_name.clone()),
        card_type: Some(new.card_type.clone()),
        last_four_digits: Some(new.last_four_digits.clone()),
        expiry_date: new.expiry_date.clone().map(Some),
        balance: Some(new.balance),
        color_gradient: Some(new.color_gradient.clone()),
    }
}

pub fn card_patch_to_wire(patch: &CardPatch) -> CardWrite {
    CardWrite {
        card_holder_name: patch.card_holder_name.clone(),
        bank_name: patch.bank_name.clone(),
        card_type: patch.card_type.clone(),
        last_four_digits: patch.last_four_digits.clone(),
        expiry_date: patch.expiry_date.clone(),
        balance: patch.balance,
        color_gradient: patch.color_gradient.clone(),
    }
}

impl Record for Card {
    const TABLE: &'static str = "cards";
    const NAME: &'static str = "card";

    type Row = CardRow;
    type New = NewCard;
    type Patch = CardPatch;
    type Write = CardWrite;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_app(row: CardRow) -> Self {
        card_to_app(row)
    }

    fn to_wire(new: &NewCard) -> CardWrite {
        card_to_wire(new)
    }

    fn patch_to_wire(patch: &CardPatch) -> CardWrite {
        card_patch_to_wire(patch)
    }
}
