//! Name pools for recruited students.

use stargazer_types::Dice;

/// Family names.
pub const SURNAMES: [&str; 47] = [
    "Zhang", "Wang", "Li", "Zhao", "Liu", "Chen", "Yang", "Huang", "Wu", "Xu", "Sun", "Ma",
    "Zhu", "Hu", "Lin", "Guo", "He", "Gao", "Luo", "Zheng", "Liang", "Xie", "Song", "Tang",
    "Xu", "Deng", "Feng", "Cao", "Peng", "Zeng", "Xiao", "Tian", "Dong", "Pan", "Yuan", "Yu",
    "Jiang", "Cai", "Yu", "Du", "Ye", "Fan", "Han", "Jin", "Qiu", "Jiang", "Qin",
];

/// Given names.
pub const GIVEN_NAMES: [&str; 50] = [
    "Zihan", "Zihan", "Siyuan", "Jiaqi", "Haoran", "Ziyu", "Yuchen", "Yuze", "Ruoxi", "Junxi",
    "Ruihang", "Sirui", "Yichen", "Chenxi", "Shuyao", "Yinuo", "Zhiruo", "Xinyi", "Shiqi",
    "Haoyu", "Yiran", "Xinyue", "Jiayi", "Muyang", "Yihang", "Zimo", "Zixuan", "Jingwen",
    "Ruonan", "Xingchen", "Mingxuan", "Haoxuan", "Jiahao", "Zhining", "Yahan", "Zhiheng",
    "Ruining", "Zekai", "Zirui", "Yuqi", "Chenyue", "Ruotong", "Sichen", "Ziyi", "Shaohan",
    "Yucheng", "Muchen", "Lingyun", "Jiahe", "Leyao",
];

/// Draw a random full name.
pub fn random_name(dice: &mut dyn Dice) -> String {
    let surname = SURNAMES.get(dice.below(SURNAMES.len())).copied().unwrap_or("Li");
    let given = GIVEN_NAMES
        .get(dice.below(GIVEN_NAMES.len()))
        .copied()
        .unwrap_or("Xingchen");
    format!("{surname} {given}")
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn names_have_two_parts() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..20 {
            let name = random_name(&mut rng);
            assert_eq!(name.split(' ').count(), 2);
        }
    }
}
