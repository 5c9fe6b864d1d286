//! Fallback sample articles.
//!
//! When a run persists nothing (every source unreachable, or every
//! candidate a duplicate) the orchestrator inserts these so the site's
//! news section never goes silent. They are marked featured and deduped by
//! title like any scraped article.

/// A hardcoded fallback article.
#[derive(Debug, Clone, Copy)]
pub struct SampleArticle {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub content: &'static str,
}

/// The fixed fallback set, inserted in order when a run yields nothing new.
pub fn fallback_articles() -> Vec<SampleArticle> {
    vec![
        SampleArticle {
            title: "Turizm Sektöründe Dijital Dönüşüm Hızlanıyor",
            excerpt: "Seyahat acenteleri ve konaklama tesisleri, rezervasyon süreçlerini dijital platformlara taşıyarak misafir deneyimini yeniden şekillendiriyor.",
            content: "<p>Seyahat acenteleri ve konaklama tesisleri, rezervasyon süreçlerini dijital platformlara taşıyarak misafir deneyimini yeniden şekillendiriyor.</p>\
                      <p>Sektör temsilcileri, mobil uygulamalar ve çevrim içi ödeme altyapılarının özellikle genç misafirler arasında tercih edilirliği artırdığını belirtiyor. Dijitalleşen işletmelerin sezon doluluk oranlarında belirgin artış gözleniyor.</p>",
        },
        SampleArticle {
            title: "Kültür Turizminde Yeni Rotalar Öne Çıkıyor",
            excerpt: "Ayasofya ve Kapadokya gibi klasik duraklara ek olarak, Anadolu'nun az bilinen antik kentleri kültür turlarının programlarına giriyor.",
            content: "<p>Ayasofya ve Kapadokya gibi klasik duraklara ek olarak, Anadolu'nun az bilinen antik kentleri kültür turlarının programlarına giriyor.</p>\
                      <p>Tur operatörleri, Sagalassos, Aizanoi ve Arslantepe gibi bölgelere düzenlenen butik turlara olan talebin geçen yıla göre iki katına çıktığını aktarıyor.</p>",
        },
        SampleArticle {
            title: "Sektör Temsilcileri Fuar Takvimini Değerlendirdi",
            excerpt: "Uluslararası turizm fuarlarına katılım planları, sektör buluşmasında ele alındı; ortak stant modeli üye işletmelere maliyet avantajı sağlayacak.",
            content: "<p>Uluslararası turizm fuarlarına katılım planları, sektör buluşmasında ele alındı; ortak stant modeli üye işletmelere maliyet avantajı sağlayacak.</p>\
                      <p>Önümüzdeki dönemde Berlin, Londra ve Dubai fuarlarında dernek çatısı altında ortak tanıtım yapılması kararlaştırıldı.</p>",
        },
        SampleArticle {
            title: "Gastronomi Turizmi Bölge Ekonomilerini Canlandırıyor",
            excerpt: "Yöresel mutfak etkinlikleri ve gastronomi festivalleri, sezon dışı dönemlerde de otel dolulukların yükselmesini sağlıyor.",
            content: "<p>Yöresel mutfak etkinlikleri ve gastronomi festivalleri, sezon dışı dönemlerde de otel dolulukların yükselmesini sağlıyor.</p>\
                      <p>Gaziantep ve Hatay başta olmak üzere gastronomi şehirlerinde düzenlenen etkinlikler, iç pazarda kısa süreli seyahat talebini belirgin biçimde artırdı.</p>",
        },
        SampleArticle {
            title: "Mesleki Eğitim Programlarına Kayıtlar Başladı",
            excerpt: "Dernek üyelerine yönelik rehberlik, acente işletmeciliği ve dijital pazarlama eğitimlerinin yeni dönem kayıtları açıldı.",
            content: "<p>Dernek üyelerine yönelik rehberlik, acente işletmeciliği ve dijital pazarlama eğitimlerinin yeni dönem kayıtları açıldı.</p>\
                      <p>Eğitimler çevrim içi olarak yürütülecek; katılımcılara dönem sonunda sertifika verilecek. Kontenjanlar önceki dönemlerde kısa sürede dolmuştu.</p>",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_samples_with_unique_titles() {
        let samples = fallback_articles();
        assert_eq!(samples.len(), 5);
        let mut titles: Vec<_> = samples.iter().map(|s| s.title).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), 5);
    }

    #[test]
    fn test_samples_are_nonempty_html() {
        for sample in fallback_articles() {
            assert!(!sample.title.is_empty());
            assert!(!sample.excerpt.is_empty());
            assert!(sample.content.starts_with("<p>"));
        }
    }
}
