/// Implements `Copy` and, with the `unsafe` feature, zero-copy slice views for a
/// `#[repr(C)]` record whose fields all have the type `$type_param`.
#[macro_export]
macro_rules! impl_scalar_record {
    ($type_name:ident, $type_param:ident) => {
        impl<$type_param> Copy for $type_name<$type_param> where $type_param: Copy {}

        #[cfg_attr(docsrs, doc(cfg(feature = "unsafe")))]
        #[cfg(feature = "unsafe")]
        impl<$type_param> $type_name<$type_param> {
            const FIELDS: usize =
                core::mem::size_of::<Self>() / core::mem::size_of::<$type_param>();

            /// Reinterprets a slice holding exactly one value per field as a record.
            #[allow(unused)]
            #[inline]
            pub fn from_slice(slice: &[$type_param]) -> &Self {
                assert_eq!(slice.len(), Self::FIELDS);

                // SAFETY: $type_name only contains `$type_param` fields and is `repr(C)`
                unsafe { &*(slice.as_ptr() as *const Self) }
            }

            /// Reinterprets a mutable slice holding exactly one value per field as a record.
            #[allow(unused)]
            #[inline]
            pub fn from_mut_slice(slice: &mut [$type_param]) -> &mut Self {
                assert_eq!(slice.len(), Self::FIELDS);

                // SAFETY: $type_name only contains `$type_param` fields and is `repr(C)`
                unsafe { &mut *(slice.as_mut_ptr() as *mut Self) }
            }
        }

        #[cfg_attr(docsrs, doc(cfg(feature = "unsafe")))]
        #[cfg(feature = "unsafe")]
        impl<$type_param> core::convert::AsRef<[$type_param]> for $type_name<$type_param> {
            fn as_ref(&self) -> &[$type_param] {
                // SAFETY: $type_name only contains `$type_param` fields and is `repr(C)`
                unsafe {
                    core::slice::from_raw_parts(self as *const _ as *const $type_param, Self::FIELDS)
                }
            }
        }

        #[cfg_attr(docsrs, doc(cfg(feature = "unsafe")))]
        #[cfg(feature = "unsafe")]
        impl<$type_param> core::convert::AsMut<[$type_param]> for $type_name<$type_param> {
            fn as_mut(&mut self) -> &mut [$type_param] {
                // SAFETY: $type_name only contains `$type_param` fields and is `repr(C)`
                unsafe {
                    core::slice::from_raw_parts_mut(self as *mut _ as *mut $type_param, Self::FIELDS)
                }
            }
        }

        #[cfg_attr(docsrs, doc(cfg(feature = "unsafe")))]
        #[cfg(feature = "unsafe")]
        impl<$type_param> core::ops::Deref for $type_name<$type_param> {
            type Target = [$type_param];

            fn deref(&self) -> &Self::Target {
                self.as_ref()
            }
        }

        #[cfg_attr(docsrs, doc(cfg(feature = "unsafe")))]
        #[cfg(feature = "unsafe")]
        impl<$type_param> core::ops::DerefMut for $type_name<$type_param> {
            fn deref_mut(&mut self) -> &mut Self::Target {
                self.as_mut()
            }
        }

        #[cfg(test)]
        paste::paste! {
            #[cfg(test)]
            mod [<tests_gen_ $type_name:lower>] {
                #[cfg(feature = "unsafe")]
                use super::*;

                #[test]
                #[cfg(feature = "unsafe")]
                fn test_from_slice() {
                    let data = [1_u32, 2, 3, 4, 5];
                    let fields = $type_name::<u32>::FIELDS;
                    let record = $type_name::from_slice(&data[..fields]);
                    assert_eq!(record.as_ref().len(), fields);
                    assert!(core::ptr::eq(record.as_ref().as_ptr(), data.as_ptr()));
                }

                #[test]
                #[cfg(feature = "unsafe")]
                fn test_from_mut_slice() {
                    let mut data = [0_u32; 5];
                    let fields = $type_name::<u32>::FIELDS;
                    {
                        let record = $type_name::from_mut_slice(&mut data[..fields]);
                        record.as_mut()[0] = 10;
                    }
                    assert_eq!(data[0], 10, "expect data to be changed");
                    assert_eq!(data[fields], 0, "expect trailing data to be untouched");
                }

                #[test]
                #[cfg(feature = "unsafe")]
                fn test_deref_slice() {
                    let mut data = [1_u32, 2, 3, 4, 5];
                    let fields = $type_name::<u32>::FIELDS;
                    {
                        let record = $type_name::from_mut_slice(&mut data[..fields]);
                        let view: &mut [u32] = &mut *record;
                        assert_eq!(view.len(), fields);
                        view[0] = 10;
                        assert_eq!(view.iter().copied().max(), Some(10));
                    }
                    assert_eq!(data[0], 10, "expect data to be changed");
                    assert_eq!(data[fields], 5, "expect trailing data to be untouched");
                }
            }
        }
    };
}
