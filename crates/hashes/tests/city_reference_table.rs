//! Rows of the reference CityHash v1.1 test table (`city-test.cc`).
//!
//! The input for row `i < 299` is `data[i * i..i * i + i]`; the final row
//! hashes all of `data`. The CRC256 columns of that table are not checked:
//! see DESIGN.md.

use hashes::fast::city;

mod common;

use common::pair;

const DATA_LEN: usize = 1 << 20;
const LAST_ROW: usize = 299;
const K0: u64 = 0xc3a5_c85c_97cb_3127;
const SEED: u64 = 1_234_567;

struct OfficialRow {
  index: usize,
  city64: u64,
  city64_seed: u64,
  city64_seeds: u64,
  city128: (u64, u64),
  city128_seed: (u64, u64),
  crc128: (u64, u64),
  crc128_seed: (u64, u64),
  city32: u32,
}

const ROWS: &[OfficialRow] = &[
  OfficialRow { index: 0, city64: 0x9ae16a3b2f90404f, city64_seed: 0x75106db890237a4a, city64_seeds: 0x3feac5f636039766, city128: (0x3df09dfc64c09a2b, 0x3cb540c392e51e29), city128_seed: (0x06b56343feac0663, 0x5b7bc50fd8e8ad92), crc128: (0x3df09dfc64c09a2b, 0x3cb540c392e51e29), crc128_seed: (0x06b56343feac0663, 0x5b7bc50fd8e8ad92), city32: 0xdc56d17a },
  OfficialRow { index: 1, city64: 0x541150e87f415e96, city64_seed: 0x1aef0d24b3148a1a, city64_seeds: 0xbacc300e1e82345a, city128: (0xc3cdc41e1df33513, 0x2c138ff2596d42f6), city128_seed: (0xf58e9082aed3055f, 0x162e192b2957163d), crc128: (0xc3cdc41e1df33513, 0x2c138ff2596d42f6), crc128_seed: (0xf58e9082aed3055f, 0x162e192b2957163d), city32: 0x99929334 },
  OfficialRow { index: 2, city64: 0x0f3786a4b25827c1, city64_seed: 0x34ee1a2bf767bd1c, city64_seeds: 0x2f15ca2ebfb631f2, city128: (0x3149ba1dac77270d, 0x070e2e076e30703c), city128_seed: (0x059bcc9659bc5296, 0x9ecbc8132ae2f1d7), crc128: (0x3149ba1dac77270d, 0x070e2e076e30703c), crc128_seed: (0x059bcc9659bc5296, 0x9ecbc8132ae2f1d7), city32: 0x4252edb7 },
  OfficialRow { index: 3, city64: 0xef923a7a1af78eab, city64_seed: 0x79163b1e1e9a9b18, city64_seeds: 0xdf3b2aca6e1e4a30, city128: (0x2193fb7620cbf23b, 0x8b6a8ff06cda8302), city128_seed: (0x1a44469afd3e091f, 0x08b0449376612506), crc128: (0x2193fb7620cbf23b, 0x8b6a8ff06cda8302), crc128_seed: (0x1a44469afd3e091f, 0x08b0449376612506), city32: 0xebc34f3c },
  OfficialRow { index: 4, city64: 0x11df592596f41d88, city64_seed: 0x843ec0bce9042f9c, city64_seeds: 0xcce2ea1e08b1eb30, city128: (0x4d09e42f09cc3495, 0x666236631b9f253b), city128_seed: (0xd28b3763cd02b6a3, 0x43b249e57c4d0c1b), crc128: (0x4d09e42f09cc3495, 0x666236631b9f253b), crc128_seed: (0xd28b3763cd02b6a3, 0x43b249e57c4d0c1b), city32: 0x26f2b463 },
  OfficialRow { index: 5, city64: 0x831f448bdc5600b3, city64_seed: 0x62a24be3120a6919, city64_seeds: 0x1b44098a41e010da, city128: (0x0dc07df53b949c6b, 0xd2b11b2081aeb002), city128_seed: (0xd212b02c1b13f772, 0xc0bed297b4be1912), crc128: (0x0dc07df53b949c6b, 0xd2b11b2081aeb002), crc128_seed: (0xd212b02c1b13f772, 0xc0bed297b4be1912), city32: 0xb042c047 },
  OfficialRow { index: 8, city64: 0xa0f10149a0e538d6, city64_seed: 0x69d008c20f87419f, city64_seeds: 0x41b36376185b3e9e, city128: (0x26b6689960ccf81d, 0x55f23b27bb9efd94), city128_seed: (0x3a17f6166dd765db, 0xc891a8a62931e782), crc128: (0x26b6689960ccf81d, 0x55f23b27bb9efd94), crc128_seed: (0x3a17f6166dd765db, 0xc891a8a62931e782), city32: 0xc87f95de },
  OfficialRow { index: 9, city64: 0xfb8d9c70660b910b, city64_seed: 0xa45b0cc3476bff1b, city64_seeds: 0xb28d1996144f0207, city128: (0x98ec31113e5e35d2, 0x5e4aeb853f1b9aa7), city128_seed: (0xbcf5c8fe4465b7c8, 0xb1ea3a8243996f15), crc128: (0x98ec31113e5e35d2, 0x5e4aeb853f1b9aa7), crc128_seed: (0xbcf5c8fe4465b7c8, 0xb1ea3a8243996f15), city32: 0x3f5538ef },
  OfficialRow { index: 12, city64: 0xe3f6828b6017086d, city64_seed: 0x21b4d1900554b3b0, city64_seeds: 0xbef38be1809e24f1, city128: (0xd93251758985ee6c, 0x32a9e9f82ba2a932), city128_seed: (0x3822aacaa95f3329, 0xdb349b2f90a490d8), crc128: (0xd93251758985ee6c, 0x32a9e9f82ba2a932), crc128_seed: (0x3822aacaa95f3329, 0xdb349b2f90a490d8), city32: 0x894a52ef },
  OfficialRow { index: 16, city64: 0x03ead5f21d344056, city64_seed: 0xfb6420393cfb05c3, city64_seeds: 0x407932394cbbd303, city128: (0xac059617f5906673, 0x94d50d3dcd3069a7), city128_seed: (0x02b26c3b92dea0f0, 0x99b7374cc78fc3fb), crc128: (0xac059617f5906673, 0x94d50d3dcd3069a7), crc128_seed: (0x02b26c3b92dea0f0, 0x99b7374cc78fc3fb), city32: 0x051b4ba8 },
  OfficialRow { index: 17, city64: 0x6abbfde37ee03b5b, city64_seed: 0x83febf188d2cc113, city64_seeds: 0xcda7b62d94d5b8ee, city128: (0xa4375590b8ae7c82, 0x168fd42f9ecae4ff), city128_seed: (0x23bbde43de2cb214, 0xa8c333112a243c8c), crc128: (0xa4375590b8ae7c82, 0x168fd42f9ecae4ff), crc128_seed: (0x23bbde43de2cb214, 0xa8c333112a243c8c), city32: 0xb6b06e40 },
  OfficialRow { index: 24, city64: 0x36a097aa49519d97, city64_seed: 0x08204380a73c4065, city64_seeds: 0x77c2004bdd9e276a, city128: (0x6ee1f817ce0b7aee, 0xe9dcb3507f0596ca), city128_seed: (0x6bc63c666b5100e2, 0xe0b056f1821752af), crc128: (0x6ee1f817ce0b7aee, 0xe9dcb3507f0596ca), crc128_seed: (0x6bc63c666b5100e2, 0xe0b056f1821752af), city32: 0x45177e0b },
  OfficialRow { index: 32, city64: 0x0782fa1b08b475e7, city64_seed: 0xfb7138951c61b23b, city64_seeds: 0x9829105e234fb11e, city128: (0x9a8c431f500ef06e, 0xd848581a580b6c12), city128_seed: (0xfecfe11e13a2bdb4, 0x6c4fa0273d7db08c), crc128: (0x9a8c431f500ef06e, 0xd848581a580b6c12), crc128_seed: (0xfecfe11e13a2bdb4, 0x6c4fa0273d7db08c), city32: 0x1fb4b518 },
  OfficialRow { index: 33, city64: 0xc5dc19b876d37a80, city64_seed: 0x15ffcff666cfd710, city64_seeds: 0xe8c30c72003103e2, city128: (0x7870765b470b2c5d, 0x078a9103ff960d82), city128_seed: (0x7bb50ffc9fac74b3, 0x477e70ab2b347db2), crc128: (0x7870765b470b2c5d, 0x078a9103ff960d82), crc128_seed: (0x7bb50ffc9fac74b3, 0x477e70ab2b347db2), city32: 0x31d13d6d },
  OfficialRow { index: 48, city64: 0x584f28543864844f, city64_seed: 0xd7cee9fc2d46f20d, city64_seeds: 0xa38dca5657387205, city128: (0x7a0b6dbab9a14e69, 0xc6d0a9d6b0e31ac4), city128_seed: (0x0a674d85812c7cf6, 0x63538c0351049940), crc128: (0x7a0b6dbab9a14e69, 0xc6d0a9d6b0e31ac4), crc128_seed: (0x0a674d85812c7cf6, 0x63538c0351049940), city32: 0x8331c5d8 },
  OfficialRow { index: 64, city64: 0xe88419922b87176f, city64_seed: 0xbcf32f41a7ddbf6f, city64_seeds: 0xd6ebefd8085c1a0f, city128: (0xd1d44fe99451ef72, 0xec951ba8e51e3545), city128_seed: (0xc0ca86b360746e96, 0xaa679cc066a8040b), crc128: (0xd1d44fe99451ef72, 0xec951ba8e51e3545), crc128_seed: (0xc0ca86b360746e96, 0xaa679cc066a8040b), city32: 0x9c9cfe88 },
  OfficialRow { index: 65, city64: 0x105191e0ec8f7f60, city64_seed: 0x5918dbfcca971e79, city64_seeds: 0x6b285c8a944767b9, city128: (0xd3e86ac4f5eccfa4, 0x0e5399df2b106ca1), city128_seed: (0x814aadfacd217f1d, 0x2754e3def1c405a9), crc128: (0xd3e86ac4f5eccfa4, 0x0e5399df2b106ca1), crc128_seed: (0x814aadfacd217f1d, 0x2754e3def1c405a9), city32: 0xb70a6ddd },
  OfficialRow { index: 96, city64: 0x930380a3741e862a, city64_seed: 0x348d28638dc71658, city64_seeds: 0x89dedcfd1654ea0d, city128: (0x07e7f61684080106, 0x837ace9794582976), city128_seed: (0x5ac8ca76a357eb1b, 0x32b58308625661fb), crc128: (0x07e7f61684080106, 0x837ace9794582976), crc128_seed: (0x5ac8ca76a357eb1b, 0x32b58308625661fb), city32: 0xaddbd3e3 },
  OfficialRow { index: 127, city64: 0xcbaa3cb8f64f54e0, city64_seed: 0x76c3b48ee5c08417, city64_seeds: 0x09f7d24e87e61ce9, city128: (0x85b8e53f22e19507, 0xbb57137739ca486b), city128_seed: (0xc77f131cca38f761, 0xc56ac3cf275be121), crc128: (0x85b8e53f22e19507, 0xbb57137739ca486b), crc128_seed: (0xc77f131cca38f761, 0xc56ac3cf275be121), city32: 0xde287a64 },
  OfficialRow { index: 128, city64: 0xb2e23e8116c2ba9f, city64_seed: 0x7e4d9c0060101151, city64_seeds: 0x3310da5e5028f367, city128: (0xadc52dddb76f6e5e, 0x4aad4e925a962b68), city128_seed: (0x204b79b7f7168e64, 0xdf29ed6671c36952), crc128: (0xadc52dddb76f6e5e, 0x4aad4e925a962b68), crc128_seed: (0x204b79b7f7168e64, 0xdf29ed6671c36952), city32: 0x878e55b9 },
  OfficialRow { index: 129, city64: 0x8aa77f52d7868eb9, city64_seed: 0x4d55bd587584e6e2, city64_seeds: 0x0d2db37041f495f5, city128: (0x0ce030d15b5fe2f4, 0x86b4a7a0780c2431), city128_seed: (0xee070a9ae5b51db7, 0xedc293d9595be5d8), crc128: (0x0ce030d15b5fe2f4, 0x86b4a7a0780c2431), crc128_seed: (0xee070a9ae5b51db7, 0xedc293d9595be5d8), city32: 0x07648486 },
  OfficialRow { index: 160, city64: 0xa90d81060932dbb0, city64_seed: 0x8acfaa88c5fbe92b, city64_seeds: 0x7c6f3447e90f7f3f, city128: (0xdd52fc14c8dd3143, 0x1bc7508516e40628), city128_seed: (0x3059730266ade626, 0x0ffa526822f391c2), crc128: (0xdd52fc14c8dd3143, 0x1bc7508516e40628), crc128_seed: (0x3059730266ade626, 0x0ffa526822f391c2), city32: 0xadf5a9c7 },
  OfficialRow { index: 200, city64: 0x07fc98006e25cac9, city64_seed: 0x77fee0484cda86a7, city64_seeds: 0x376ec3d447060456, city128: (0x84064a6dcf916340, 0xfbf55a26790e0ebb), city128_seed: (0x2e7f84151c31a5c2, 0x9f7f6d76b950f9bf), crc128: (0x84064a6dcf916340, 0xfbf55a26790e0ebb), crc128_seed: (0x2e7f84151c31a5c2, 0x9f7f6d76b950f9bf), city32: 0xa8bb6d80 },
  OfficialRow { index: 240, city64: 0x8959dbbf07387d36, city64_seed: 0xb4658afce48ea35d, city64_seeds: 0x8f3f82437d8cb8d6, city128: (0x6566d74954986ba5, 0x99d5235cc82519a7), city128_seed: (0x0257a23805c2d825, 0xad75ccb968e93403), crc128: (0x6566d74954986ba5, 0x99d5235cc82519a7), crc128_seed: (0x0257a23805c2d825, 0xad75ccb968e93403), city32: 0x52aeb863 },
  OfficialRow { index: 241, city64: 0x4739613234278a49, city64_seed: 0x99ea5bcd340bf663, city64_seeds: 0x258640912e712b12, city128: (0xc8a2827404991402, 0x7ee5e78550f02675), city128_seed: (0x2ec53952db5ac662, 0x1526405a9df6794b), crc128: (0xc8a2827404991402, 0x7ee5e78550f02675), crc128_seed: (0x2ec53952db5ac662, 0x1526405a9df6794b), city32: 0xef7c0c18 },
  OfficialRow { index: 255, city64: 0x915263c671b28809, city64_seed: 0xa815378e7ad762fd, city64_seeds: 0xabec6dc9b669f559, city128: (0xd17c928c5342477f, 0x745130b795254ad5), city128_seed: (0x8c5db926fe88f8ba, 0x742a95c953e6d974), crc128: (0xd17c928c5342477f, 0x745130b795254ad5), crc128_seed: (0x8c5db926fe88f8ba, 0x742a95c953e6d974), city32: 0x17f148e9 },
  OfficialRow { index: 256, city64: 0x2b67cdd38c307a5e, city64_seed: 0x0cb1d45bb5c9fe1c, city64_seeds: 0x800baf2a02ec18ad, city128: (0x6531c1fe32bcb417, 0x8c970d8df8cdbeb4), city128_seed: (0x917ba5fc67e72b40, 0x4b65e4e263e0a426), crc128: (0x6531c1fe32bcb417, 0x8c970d8df8cdbeb4), crc128_seed: (0x917ba5fc67e72b40, 0x4b65e4e263e0a426), city32: 0xbfd94880 },
  OfficialRow { index: 298, city64: 0x74c0b8a6821faafe, city64_seed: 0xabac39d7491370e7, city64_seeds: 0xfaf0b2a48a4e6aed, city128: (0x967e970df9673d2a, 0xd465247cffa415c0), city128_seed: (0x33a1df0ca1107722, 0x49fc2a10adce4a32), crc128: (0x967e970df9673d2a, 0xd465247cffa415c0), crc128_seed: (0x33a1df0ca1107722, 0x49fc2a10adce4a32), city32: 0xf6a9fbf8 },
  OfficialRow { index: 299, city64: 0x5fb5e48ac7b7fa4f, city64_seed: 0xa96170f08f5acbc7, city64_seeds: 0xbbf5c63d4f52a1e5, city128: (0x6cc09e60700563e9, 0xd18f23221e964791), city128_seed: (0xffc23eeef7af26eb, 0x693a954a3622a315), crc128: (0x815308a32a9b0daf, 0xefb2ab27bf6fd0bd), crc128_seed: (0x9f1ffc0986111118, 0xf9a3aa1778ea3985), city32: 0x5398210c },
];

fn official_data() -> Vec<u8> {
  let mut a = 9u64;
  let mut b = 777u64;
  (0..DATA_LEN)
    .map(|i| {
      a = a.wrapping_add(b);
      b = b.wrapping_add(a);
      a = (a ^ (a >> 41)).wrapping_mul(K0);
      b = (b ^ (b >> 41)).wrapping_mul(K0).wrapping_add(i as u64);
      (b >> 37) as u8
    })
    .collect()
}

fn input(data: &[u8], index: usize) -> &[u8] {
  if index == LAST_ROW { data } else { &data[index * index..index * index + index] }
}

fn seed128() -> u128 {
  u128::from(SEED) | (u128::from(K0) << 64)
}

#[test]
fn matches_reference_table() {
  let data = official_data();
  for row in ROWS {
    let s = input(&data, row.index);
    let i = row.index;
    assert_eq!(city::hash64(s), row.city64, "city64 row={i}");
    assert_eq!(city::hash64_with_seed(s, SEED), row.city64_seed, "city64_seed row={i}");
    assert_eq!(city::hash64_with_seeds(s, SEED, K0), row.city64_seeds, "city64_seeds row={i}");
    assert_eq!(pair(city::hash128(s)), row.city128, "city128 row={i}");
    assert_eq!(pair(city::hash128_with_seed(s, seed128())), row.city128_seed, "city128_seed row={i}");
    assert_eq!(city::hash32(s), row.city32, "city32 row={i}");
  }
}

#[cfg(all(target_arch = "x86_64", target_feature = "sse4.2"))]
#[test]
fn crc128_matches_reference_table_up_to_900_bytes() {
  let data = official_data();
  for row in ROWS.iter().filter(|row| row.index != LAST_ROW) {
    let s = input(&data, row.index);
    let i = row.index;
    assert_eq!(pair(city::crc::hash_crc128(s)), row.crc128, "crc128 row={i}");
    assert_eq!(
      pair(city::crc::hash_crc128_with_seed(s, seed128())),
      row.crc128_seed,
      "crc128_seed row={i}"
    );
  }
}
