use crate::db::Record;
use crate::db::models::{NewProfile, NewUser, Profile, ProfilePatch, User, UserPatch};
use crate::db::wire::{ProfileRow, ProfileWrite, UserRow, UserWrite};

pub fn profile_to_app(row: ProfileRow) -> Profile {
    Profile {
        id: row.id,
        admin_user_id: row.admin_user_id,
        full_name: row.full_name,
        email: row.email,
        phone: row.phone,
        company_name: row.company_name,
        website: row.website,
        address: row.address,
        bank_account: row.bank_account,
        authorized_signer: row.authorized_signer,
        id_number: row.id_number,
        bio: row.bio,
        income_categories: row.income_categories,
        expense_categories: row.expense_categories,
        project_types: row.project_types,
        event_types: row.event_types,
        asset_categories: row.asset_categories,
        sop_categories: row.sop_categories,
        package_categories: row.package_categories,
        project_status_config: row.project_status_config,
        notification_settings: row.notification_settings,
        security_settings: row.security_settings,
        briefing_template: row.briefing_template,
        terms_and_conditions: row.terms_and_conditions,
        contract_template: row.contract_template,
        logo_base64: row.logo_base64,
        brand_color: row.brand_color,
        public_page_config: row.public_page_config,
        package_share_template: row.package_share_template,
        booking_form_template: row.booking_form_template,
        chat_templates: row.chat_templates,
    }
}

pub fn profile_to_wire(new: &NewProfile) -> ProfileWrite {
    ProfileWrite {
        admin_user_id: Some(new.admin_user_id.clone()),
        full_name: Some(new.full_name.clone()),
        email: Some(new.email.clone()),
        phone: Some(new.phone.clone()),
        company_name: Some(new.company_name.clone()),
        website: Some(new.website.clone()),
        address: Some(new.address.clone()),
        bank_account: Some(new.bank_account.clone()),
        authorized_signer: Some(new.authorized_signer.clone()),
        id_number: new.id_number.clone().map(Some),
        bio: Some(new.bio.clone()),
        income_categories: Some(new.income_categories.clone()),
        expense_categories: Some(new.expense_categories.clone()),
        project_types: Some(new.project_types.clone()),
        event_types: Some(new.event_types.clone()),
        asset_categories: Some(new.asset_categories.clone()),
        sop_categories: Some(new.sop_categories.clone()),
        package_categories: Some(new.package_categories.clone()),
        project_status_config: Some(new.project_status_config.clone()),
        notification_settings: Some(new.notification_settings.clone()),
        security_settings: Some(new.security_settings.clone()),
        briefing_template: Some(new.briefing_template.clone()),
        terms_and_conditions: new.terms_and_conditions.clone().map(Some),
        contract_template: new.contract_template.clone().map(Some),
        logo_base64: new.logo_base64.clone().map(Some),
        brand_color: new.brand_color.clone().map(Some),
        public_page_config: Some(new.public_page_config.clone()),
        package_share_template: new.package_share_template.clone().map(Some),
        booking_form_template: new.booking_form_template.clone().map(Some),
        chat_templates: new.chat_templates.clone().map(Some),
    }
}

/// The owning admin user is never part of a profile update.
pub fn profile_patch_to_wire(patch: &ProfilePatch) -> ProfileWrite {
    ProfileWrite {
        admin_user_id: None,
        full_name: patch.full_name.clone(),
        email: patch.email.clone(),
        phone: patch.phone.clone(),
        company_name: patch.company_name.clone(),
        website: patch.website.clone(),
        address: patch.address.clone(),
        bank_account: patch.bank_account.clone(),
        authorized_signer: patch.authorized_signer.clone(),
        id_number: patch.id_number.clone(),
        bio: patch.bio.clone(),
        income_categories: patch.income_categories.clone(),
        expense_categories: patch.expense_categories.clone(),
        project_types: patch.project_types.clone(),
        event_types: patch.event_types.clone(),
        asset_categories: patch.asset_categories.clone(),
        sop_categories: patch.sop_categories.clone(),
        package_categories: patch.package_categories.clone(),
        project_status_config: patch.project_status_config.clone(),
        notification_settings: patch.notification_settings.clone(),
        security_settings: patch.security_settings.clone(),
        briefing_template: patch.briefing_template.clone(),
        terms_and_conditions: patch.terms_and_conditions.clone(),
        contract_template: patch.contract_template.clone(),
        logo_base64: patch.logo_base64.clone(),
        brand_color: patch.brand_color.clone(),
        public_page_config: patch.public_page_config.clone(),
        package_share_template: patch.package_share_template.clone(),
        booking_form_template: patch.booking_form_template.clone(),
        chat_templates: patch.chat_templates.clone(),
    }
}

impl Record for Profile {
    const TABLE: &'static str = "profiles";
    const NAME: &'static str = "profile";

    type Row = ProfileRow;
    type New = NewProfile;
    type Patch = ProfilePatch;
    type Write = ProfileWrite;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_app(row: ProfileRow) -> Self {
        profile_to_app(row)
    }

    fn to_wire(new: &NewProfile) -> ProfileWrite {
        profile_to_wire(new)
    }

    fn patch_to_wire(patch: &ProfilePatch) -> ProfileWrite {
        profile_patch_to_wire(patch)
    }
}

pub fn user_to_app(row: UserRow) -> User {
    User {
        id: row.id,
        email: row.email,
        password: row.password,
        full_name: row.full_name,
        company_name: row.company_name,
        role: row.role,
        permissions: row.permissions,
    }
}

pub fn user_to_wire(new: &NewUser) -> UserWrite {
    UserWrite {
        email: Some(new.email.clone()),
        password: Some(new.password.clone()),
        full_name: Some(new.full_name.clone()),
        company_name: new.company_name.clone().map(Some),
        role: Some(new.role.clone()),
        permissions: new.permissions.clone().map(Some),
    }
}

pub fn user_patch_to_wire(patch: &UserPatch) -> UserWrite {
    UserWrite {
        email: patch.email.clone(),
        password: patch.password.clone(),
        full_name: patch.full_name.clone(),
        company_name: patch.company_name.clone(),
        role: patch.role.clone(),
        permissions: patch.permissions.clone(),
    }
}

impl Record for User {
    const TABLE: &'static str = "users";
    const NAME: &'static str = "user";

    type Row = UserRow;
    type New = NewUser;
    type Patch = UserPatch;
    type Write = UserWrite;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_app(row: UserRow) -> Self {
        user_to_app(row)
    }

    fn to_wire(new: &NewUser) -> UserWrite {
        user_to_wire(new)
    }

    fn patch_to_wire(patch: &UserPatch) -> UserWrite {
        user_patch_to_wire(patch)
    }
}
