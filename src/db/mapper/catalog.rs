use crate::db::Record;
use crate::db::models::{AddOn, AddOnPatch, NewAddOn, NewPackage, Package, PackagePatch};
use crate::db::wire::{AddOnRow, AddOnWrite, PackageRow, PackageWrite};

pub fn package_to_app(row: PackageRow) -> Package {
    Package {
        id: row.id,
        name: row.name,
        price: row.price,
        category: row.category,
        physical_items: row.physical_items,
        digital_items: row.digital_items,
        processing_time: row.processing_time,
        default_printing_cost: row.default_printing_cost,
        default_transport_cost: row.default_transport_cost,
        photographers: row.photographers,
        videographers: row.videographers,
        cover_image: row.cover_image,
    }
}

pub fn package_to_wire(new: &NewPackage) -> PackageWrite {
    PackageWrite {
        name: Some(new.name.clone()),
        price: Some(new.price),
        category: Some(new.category.clone()),
        physical_items: Some(new.physical_items.clone()),
        digital_items: Some(new.digital_items.clone()),
        processing_time: Some(new.processing_time.clone()),
        default_printing_cost: new.default_printing_cost.map(Some),
        default_transport_cost: new.default_transport_cost.map(Some),
        photographers: new.photographers.clone().map(Some),
        videographers: new.videographers.clone().map(Some),
        cover_image: new.cover_image.clone().map(Some),
    }
}

pub fn package_patch_to_wire(patch: &PackagePatch) -> PackageWrite {
    PackageWrite {
        name: patch.name.clone(),
        price: patch.price,
        category: patch.category.clone(),
        physical_items: patch.physical_items.clone(),
        digital_items: patch.digital_items.clone(),
        processing_time: patch.processing_time.clone(),
        default_printing_cost: patch.default_printing_cost,
        default_transport_cost: patch.default_transport_cost,
        photographers: patch.photographers.clone(),
        videographers: patch.videographers.clone(),
        cover_image: patch.cover_image.clone(),
    }
}

impl Record for Package {
    const TABLE: &'static str = "packages";
    const NAME: &'static str = "package";

    type Row = PackageRow;
    type New = NewPackage;
    type Patch = PackagePatch;
    type Write = PackageWrite;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_app(row: PackageRow) -> Self {
        package_to_app(row)
    }

    fn to_wire(new: &NewPackage) -> PackageWrite {
        package_to_wire(new)
    }

    fn patch_to_wire(patch: &PackagePatch) -> PackageWrite {
        package_patch_to_wire(patch)
    }
}

pub fn add_on_to_app(row: AddOnRow) -> AddOn {
    AddOn {
        id: row.id,
        name: row.name,
        price: row.price,
    }
}

pub fn add_on_to_wire(new: &NewAddOn) -> AddOnWrite {
    AddOnWrite {
        name: Some(new.name.clone()),
        price: Some(new.price),
    }
}

pub fn add_on_patch_to_wire(patch: &AddOnPatch) -> AddOnWrite {
    AddOnWrite {
        name: patch.name.clone(),
        price: patch.price,
    }
}

impl Record for AddOn {
    const TABLE: &'static str = "add_ons";
    const NAME: &'static str = "add-on";

    type Row = AddOnRow;
    type New = NewAddOn;
    type Patch = AddOnPatch;
    type Write = AddOnWrite;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_app(row: AddOnRow) -> Self {
        add_on_to_app(row)
    }

    fn to_wire(new: &NewAddOn) -> AddOnWrite {
        add_on_to_wire(new)
    }

    fn patch_to_wire(patch: &AddOnPatch) -> AddOnWrite {
        add_on_patch_to_wire(patch)
    }
}
