//! Bundled church dataset.

use super::types::PointOfInterest;
use crate::geo::Coordinate;

struct BuiltinChurch {
    name: &'static str,
    address: &'static str,
    lat: f64,
    lon: f64,
}

// Ids are assigned from declaration order, starting at 1.
const BUILTIN_CHURCHES: &[BuiltinChurch] = &[
    BuiltinChurch {
        name: "Nhà thờ Lớn Hà Nội",
        address: "40 Nhà Chung, Hàng Trống, Hoàn Kiếm, Hà Nội",
        lat: 21.0287, lon: 105.8489,
    },
    BuiltinChurch {
        name: "Nhà thờ Cửa Bắc",
        address: "56 Phan Đình Phùng, Quán Thánh, Ba Đình, Hà Nội",
        lat: 21.0414, lon: 105.8427,
    },
    BuiltinChurch {
        name: "Nhà thờ Hàm Long",
        address: "21 Hàm Long, Phan Chu Trinh, Hoàn Kiếm, Hà Nội",
        lat: 21.0180, lon: 105.8517,
    },
    BuiltinChurch {
        name: "Nhà thờ Thái Hà",
        address: "180/2 Nguyễn Lương Bằng, Quang Trung, Đống Đa, Hà Nội",
        lat: 21.0146, lon: 105.8270,
    },
    BuiltinChurch {
        name: "Nhà thờ Hàng Bột",
        address: "180 Tôn Đức Thắng, Hàng Bột, Đống Đa, Hà Nội",
        lat: 21.0222, lon: 105.8290,
    },
    BuiltinChurch {
        name: "Nhà thờ Đức Bà Sài Gòn",
        address: "01 Công xã Paris, Bến Nghé, Quận 1, TP. Hồ Chí Minh",
        lat: 10.7798, lon: 106.6990,
    },
    BuiltinChurch {
        name: "Nhà thờ Tân Định",
        address: "289 Hai Bà Trưng, Phường 8, Quận 3, TP. Hồ Chí Minh",
        lat: 10.7884, lon: 106.6908,
    },
    BuiltinChurch {
        name: "Nhà thờ Huyện Sỹ",
        address: "1 Tôn Thất Tùng, Phạm Ngũ Lão, Quận 1, TP. HCM",
        lat: 10.7688, lon: 106.6871,
    },
    BuiltinChurch {
        name: "Nhà thờ Chợ Quán",
        address: "120 Trần Bình Trọng, Phường 2, Quận 5, TP. Hồ Chí Minh",
        lat: 10.7573, lon: 106.6804,
    },
    BuiltinChurch {
        name: "Nhà thờ Cha Tam",
        address: "25 Học Lạc, Phường 14, Quận 5, TP. HCM",
        lat: 10.7522, lon: 106.6561,
    },
    BuiltinChurch {
        name: "Nhà thờ Chính tòa Hải Phòng",
        address: "46 Hoàng Văn Thụ, Minh Khai, Hồng Bàng, Hải Phòng",
        lat: 20.8620, lon: 106.6797,
    },
    BuiltinChurch {
        name: "Nhà thờ Phát Diệm",
        address: "Thị trấn Phát Diệm, Kim Sơn, Ninh Bình",
        lat: 20.0930, lon: 106.0783,
    },
    BuiltinChurch {
        name: "Nhà thờ Chính tòa Bùi Chu",
        address: "Xuân Ngọc, Xuân Trường, Nam Định",
        lat: 20.2776, lon: 106.3568,
    },
    BuiltinChurch {
        name: "Nhà thờ Đá Sa Pa",
        address: "Thị xã Sa Pa, Lào Cai",
        lat: 22.3354, lon: 103.8420,
    },
    BuiltinChurch {
        name: "Vương cung thánh đường La Vang",
        address: "Hải Phú, Hải Lăng, Quảng Trị",
        lat: 16.7069, lon: 107.1917,
    },
    BuiltinChurch {
        name: "Nhà thờ Chính tòa Phủ Cam",
        address: "1 Nguyễn Trường Tộ, Phước Vĩnh, Huế",
        lat: 16.4545, lon: 107.5880,
    },
    BuiltinChurch {
        name: "Nhà thờ Con Gà Đà Nẵng",
        address: "156 Trần Phú, Hải Châu, Đà Nẵng",
        lat: 16.0669, lon: 108.2231,
    },
    BuiltinChurch {
        name: "Nhà thờ Núi Nha Trang",
        address: "31 Thái Nguyên, Phước Tân, Nha Trang, Khánh Hòa",
        lat: 12.2466, lon: 109.1880,
    },
    BuiltinChurch {
        name: "Nhà thờ Chính tòa Đà Lạt",
        address: "15 Trần Phú, Phường 3, Đà Lạt, Lâm Đồng",
        lat: 11.9368, lon: 108.4375,
    },
];

/// Materialize the bundled dataset.
pub(super) fn builtin_points() -> Vec<PointOfInterest> {
    BUILTIN_CHURCHES
        .iter()
        .zip(1..)
        .map(|(c, id)| PointOfInterest {
            id,
            name: c.name.to_string(),
            address: c.address.to_string(),
            coordinate: Coordinate::new(c.lat, c.lon),
        })
        .collect()
}
