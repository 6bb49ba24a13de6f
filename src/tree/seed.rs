// Initial family structure the site ships with.

use crate::tree::types::*;

fn member(id: &str, ko: &str, en: &str) -> FamilyMember {
    FamilyMember::new(id, LocalizedString::new(ko, en))
}

fn couple(id: &str, ko: &str, en: &str, spouse_ko: &str, spouse_en: &str) -> FamilyMember {
    member(id, ko, en).with_spouse(LocalizedString::new(spouse_ko, spouse_en))
}

pub fn seed_root() -> FamilyMember {
    let han_na = couple("na-han-na", "나한나", "Na Han-na", "정기원", "Jeong Gi-won")
        .with_child(member("jung-ha-yoon", "정하윤", "Jung Ha-yoon"));
    let yo_han = couple("na-yo-han", "나요한", "Na Yo-han", "형정순", "Hyeong Jeong-soon")
        .with_child(member("na-seo-hyun", "나서현", "Na Seo-hyun"));
    let jong_choon = couple("na-jong-choon", "나종춘", "Na Jong-choon", "장명애", "Jang Myeong-aei")
        .with_child(han_na)
        .with_child(yo_han);
    let jong_seop = couple("na-jong-seop", "나종섭", "Na Jong-seop", "김양진", "Kim Yang-jin")
        .with_child(member("na-gyeong-chan", "나경찬", "Sam"))
        .with_child(member("na-gyeong-hoon", "나경훈", "Brian"));
    let gi_bong = couple("na-gi-bong", "나기봉", "Na Gi-bong", "김필자", "Kim Phil-ja")
        .with_child(jong_choon)
        .with_child(member("na-jong-hoon", "나종훈", "Na Jong-hoon"))
        .with_child(member("na-jong-cheol", "나종철", "Na Jong-cheol"))
        .with_child(jong_seop);
    let geun_sik = couple("na-geun-sik", "나근식", "Na Geun-sik", "장국팔", "Jang Gook-pal")
        .with_child(gi_bong)
        .with_child(member("kim-phil-ja-sister", "김필자", "Kim Phil-ja"));
    let ki_hong = couple("kim-ki-hong", "김기홍", "Kim Ki-hong", "황후남", "Hwang Hoo-nam").with_child(
        couple("na-shin-suk", "나신숙", "Na Shin-suk", "김진수", "Kim Jin-su")
            .with_child(member("kim-shi-hoo", "김시후", "Kim Shi-hoo")),
    );

    FamilyMember::new(ROOT_ID, LocalizedString::both("God Father"))
        .with_child(geun_sik)
        .with_child(ki_hong)
}

pub fn seed_data(last_modified: String) -> FamilyTreeData {
    FamilyTreeData {
        root: seed_root(),
        metadata: TreeMetadata { last_modified, version: DATA_VERSION.to_string() },
    }
}
