//! Built-in dataset.
//!
//! [`default_record`] seeds a fresh session and is the merge base for every
//! snapshot loaded from the store, so it must stay fully populated.

use crate::model::{ComparisonItem, ComparisonRow, ImageEntry, ListingRecord, ShippingInfo};

/// Comparison rows used when a record defines none.
pub fn default_comparison_rows() -> Vec<ComparisonRow> {
    vec![
        ComparisonRow::new("Price", "price"),
        ComparisonRow::new("Material", "material"),
        ComparisonRow::new("Light Source", "lightSource"),
        ComparisonRow::new("Base", "base"),
    ]
}

/// Internal store accounts. `(id, name)`; ids are what `accountId` holds.
pub const ACCOUNTS: &[(&str, &str)] = &[
    ("1", "ledsone"),
    ("2", "retroled"),
    ("3", "bestbringer"),
    ("4", "sunsone"),
    ("21", "dctransformer"),
    ("22", "electricalsone"),
    ("23", "lightingsone"),
    ("24", "coventrylights"),
    ("25", "electro_shine"),
    ("27", "ledsonede"),
    ("28", "huettenlampen"),
    ("41", "vintageinterior"),
    ("211", "urigal"),
    ("222", "homin_gmbh"),
    ("238", "neighbourmarket"),
];

/// Account name for an id, if known.
pub fn account_name(id: &str) -> Option<&'static str> {
    ACCOUNTS
        .iter()
        .find(|(acc_id, _)| *acc_id == id)
        .map(|(_, name)| *name)
}

const AMAZON_MEDIA: &str = "https://m.media-amazon.com/images/S/aplus-media-library-service-media";

fn comparison_item(
    id: &str,
    image: &str,
    image_alt: &str,
    title: &str,
    link: &str,
    price: &str,
) -> ComparisonItem {
    ComparisonItem {
        id: id.into(),
        image: image.into(),
        image_alt: image_alt.into(),
        title: title.into(),
        link: link.into(),
        ..Default::default()
    }
    .with_field("price", price)
    .with_field("material", "Metal")
    .with_field("lightSource", "LED")
    .with_field("base", "E27 / B22")
}

/// The record a brand-new session starts from.
pub fn default_record() -> ListingRecord {
    let main_images = [
        (
            "180b67cf-f79d-46e8-9df8-db620af7ce1f",
            "Modern Ceiling Light Shade - Front View",
        ),
        (
            "0a6db1f2-2ef2-4943-b10f-ad5cd250b222",
            "Modern Ceiling Light Shade - Side View",
        ),
        (
            "07ab86be-7e53-4f92-8b38-750a5bf2f181",
            "Modern Ceiling Light Shade - Installation Details",
        ),
        (
            "93b770b4-48fd-47d6-abaa-ca71d1b9e34f",
            "Modern Ceiling Light Shade - Dimensions",
        ),
        (
            "0ebe562b-3967-4df3-890f-fdabc61d7322",
            "Modern Ceiling Light Shade - Usage Example",
        ),
    ]
    .into_iter()
    .map(|(asset, alt)| {
        ImageEntry::new(
            format!("{AMAZON_MEDIA}/{asset}.__CR0,0,1464,600_PT0_SX1464_V1___.jpg"),
            alt,
        )
    })
    .collect();

    let comparison_items = vec![
        comparison_item(
            "1",
            "https://i.ebayimg.com/images/g/BP8AAeSwo9houUsk/s-l1600.webp",
            "Cone Easy Fit Lampshade - Metal Design",
            "Cone Easy Fit Lampshade",
            "https://www.ebay.co.uk/itm/164006555006",
            "£7.07",
        ),
        comparison_item(
            "2",
            "https://i.ebayimg.com/images/g/eGMAAeSw3KFoqFux/s-l1600.webp",
            "Black Light Shades - Modern Style",
            "Black Light Shades",
            "https://www.ebay.co.uk/itm/167734616067",
            "£8.23",
        ),
        comparison_item(
            "3",
            "https://i.ebayimg.com/images/g/V6kAAeSw1U5ot~vQ/s-l1600.webp",
            "Easy Fit Pendant Shades - Contemporary Design",
            "Easy Fit Pendant Shades",
            "https://www.ebay.co.uk/itm/167764761833",
            "£10.66",
        ),
        comparison_item(
            "4",
            "https://i.ebayimg.com/images/g/eKAAAOSwCf5oBb0M/s-l1600.webp",
            "Easy Fit Semi Curvy Shade - Vintage Style",
            "Easy Fit Semi Curvy Shade",
            "https://www.ebay.co.uk/itm/164666761396",
            "£12.78",
        ),
        comparison_item(
            "5",
            "https://i.ebayimg.com/images/g/TFsAAOSwv5loAOvd/s-l1600.webp",
            "Easy Fit Light Shades - Retro Design",
            "Easy Fit Light Shades",
            "https://www.ebay.co.uk/itm/164043595851",
            "£12.46",
        ),
    ];

    ListingRecord {
        title: "Modern Ceiling Light Shade Lampshade Easy Fit Pendant Metal Kitchen Living Room"
            .into(),
        account_id: "1".into(),
        main_images,
        feature_images: Vec::new(),
        feature_images_footer: None,
        comparison_items,
        comparison_rows: default_comparison_rows(),
        comparison_description: Some(
            "WITH THIS SHADE, YOU CAN INSTANTLY ADD FLAIR AND STYLE TO YOUR LIVING, DINING, \
KITCHEN, CORRIDORS, ENTRANCES, CORRIDORS, WALK-IN CLOSETS, STAIRS, AISLES AND OTHER SPACES."
                .into(),
        ),
        comparison_brand_bar: Some("LEDSONE".into()),
        description: "Give your room an instant update with this stylish Metal easy-fit \
lampshade. Designed to fit directly onto your existing pendant light, it requires no \
electrician and no complicated installation."
            .into(),
        specifications: [
            "Item Type: Lampshade",
            "Style: Vintage/Retro",
            "Material: Metal",
            "Dimensions of the shade: 29cm width x 17cm height",
            "Installation area: indoor",
            "Shade shape: curvy",
            "Features of the shade: no wiring required, Easy to fit, it simply attaches to your existing lights.",
        ]
        .map(String::from)
        .to_vec(),
        package_includes: vec!["2 x Lamp shades Only".into()],
        about_items: [
            "DESIGN: Retro Style black dome light shade with sleek lines suits ceiling, pendant, or wall lights. Includes a reducer plate for easy fit on various lamp holders, combining style and flexible installation.",
            "MATERIAL & DIMENSION: This beautiful home lamp is made from strong metal with a durable black finish. It features a 29cm diameter, 17cm height, and a 4cm center hole, ideal for easy Ceiling fitting.",
            "INDOOR APPLICATION: Ideal for stairwells, reading nooks, art studios, loft apartments, breakfast bars, boutique stores, gallery spaces, or home offices—adds rustic charm to creative modern interiors.",
            "INSTALLATION: Designed for quick, tool-free setup, this easy-fit lampshade includes a reducer plate for B22 bayonet caps and can be used without it for E27 screw sockets—ideal for ceiling, pendant, or wall lights.",
            "PACKAGE INCLUDED: You’ll receive 2 x black dome lampshades and 2 x white reducer plates. Please note: bulbs are not included—this package contains the lampshades and reducer ring only, ready for easy fitting.",
        ]
        .map(String::from)
        .to_vec(),
        shipping_info: ShippingInfo {
            free_shipping: "This can take anywhere between 2-5 working days, sometimes longer."
                .into(),
            first_class:
                "24-hour service. Service cost is £4.99, and this is a 1-3 working days service."
                    .into(),
            international:
                "7-10 working days and sometimes longer depending on the destination of the order."
                    .into(),
        },
        about_us: "We are a UK-based company providing high-quality lighting solutions. Our goal \
is to deliver stylish and modern products with excellent service. For any queries, contact us \
via eBay messaging – replies within 24 hours."
            .into(),
        logo_url: "https://ledsone.co.uk/cdn/shop/files/logo.gif?v=1689066753&width=165".into(),
        logo_alt: "Ledsone - Quality Lighting Store".into(),
        ebay_store_url: "https://www.ebay.co.uk/str/ledsone".into(),
    }
}
